//! Dict Context - ユーザー辞書の単語モデル
//!
//! 単語は API 入力（表層形・発音・アクセント型）から検証付きで生成され、
//! NAIST-jdic 互換の CSV 行として形態素解析器のコンパイル入力になる。

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::errors::DictError;
use super::part_of_speech::{priority_to_cost, WordTypes, MAX_PRIORITY};

/// 発音として許すカタカナ列
static PRONUNCIATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ァ-ヴー]+$").expect("発音の正規表現が不正"));

/// モーラ数カウント用のパターン
///
/// 2 文字で 1 モーラになる組（イェ, キャ行, ツァ行など）を先に拾い、
/// 残りを 1 文字 1 モーラと数える。
static MORA_COUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let rule_others = "[イ][ェ]|[ヴ][ャュョ]|[トド][ゥ]|[テデ][ィャュョ]|[デ][ェ]|[クグ][ヮ]";
    let rule_line_i = "[キシチニヒミリギジビピ][ェャュョ]";
    let rule_line_u = "[ツフヴ][ァ]|[ウスツフヴズ][ィ]|[ウツフヴ][ェォ]";
    let rule_one_mora = "[ァ-ヴー]";
    Regex::new(&format!(
        "(?:{rule_others}|{rule_line_i}|{rule_line_u}|{rule_one_mora})"
    ))
    .expect("モーラ数の正規表現が不正")
});

const SUTEGANA: [char; 10] = ['ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ャ', 'ュ', 'ョ', 'ヮ', 'ッ'];

/// 辞書のコンパイルに使われる単語情報
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDictWord {
    /// 表層形（全角へ正規化済み）
    pub surface: String,
    /// 優先度 (0..=10)
    pub priority: u32,
    /// 文脈 ID
    #[serde(default = "default_context_id")]
    pub context_id: i32,
    /// 品詞
    pub part_of_speech: String,
    /// 品詞細分類1
    pub part_of_speech_detail_1: String,
    /// 品詞細分類2
    pub part_of_speech_detail_2: String,
    /// 品詞細分類3
    pub part_of_speech_detail_3: String,
    /// 活用型
    pub inflectional_type: String,
    /// 活用形
    pub inflectional_form: String,
    /// 原形
    pub stem: String,
    /// 読み
    pub yomi: String,
    /// 発音
    pub pronunciation: String,
    /// アクセント型（0 は平板型）
    pub accent_type: usize,
    /// モーラ数（発音から導出）
    pub mora_count: usize,
    /// アクセント結合規則
    pub accent_associative_rule: String,
}

fn default_context_id() -> i32 {
    WordTypes::ProperNoun.detail().context_id
}

/// API から受け取る単語属性のあつまり
#[derive(Debug, Clone, Deserialize)]
pub struct WordProperty {
    pub surface: String,
    pub pronunciation: String,
    pub accent_type: usize,
    pub word_type: Option<WordTypes>,
    pub priority: Option<u32>,
}

/// ASCII 印字文字を全角へ写す
fn to_zenkaku(surface: &str) -> String {
    surface
        .chars()
        .map(|c| {
            if ('!'..='~').contains(&c) {
                char::from_u32(c as u32 - 0x21 + 0xFF01).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// 発音のカタカナ検証
///
/// 捨て仮名は直後に別の捨て仮名を置けない（「ッ」の後の「ッ」も不可、
/// ただし「ッ」の後に続く通常仮名は可）。「ヮ」は「ク」「グ」の直後のみ。
fn validate_pronunciation(pronunciation: &str) -> Result<(), DictError> {
    if !PRONUNCIATION_PATTERN.is_match(pronunciation) {
        return Err(DictError::InvalidPronunciation(
            "発音は有効なカタカナでなくてはいけません".to_string(),
        ));
    }
    let chars: Vec<char> = pronunciation.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if SUTEGANA.contains(&c) {
            if let Some(&next) = chars.get(i + 1) {
                let next_is_small = SUTEGANA[..SUTEGANA.len() - 1].contains(&next);
                if next_is_small || (c == 'ッ' && next == 'ッ') {
                    return Err(DictError::InvalidPronunciation(
                        "捨て仮名の連続".to_string(),
                    ));
                }
            }
        }
        if c == 'ヮ' && i != 0 && !matches!(chars[i - 1], 'ク' | 'グ') {
            return Err(DictError::InvalidPronunciation(
                "「くゎ」「ぐゎ」以外の「ゎ」の使用".to_string(),
            ));
        }
    }
    Ok(())
}

/// 発音カタカナ列のモーラ数を数える
pub fn count_moras(pronunciation: &str) -> usize {
    MORA_COUNT_PATTERN.find_iter(pronunciation).count()
}

/// 単語属性から検証済みの単語を生成する
pub fn create_word(property: WordProperty) -> Result<UserDictWord, DictError> {
    let word_type = property.word_type.unwrap_or(WordTypes::ProperNoun);
    let priority = property.priority.unwrap_or(5);
    if priority > MAX_PRIORITY {
        return Err(DictError::InvalidPriority(priority));
    }

    validate_pronunciation(&property.pronunciation)?;
    let mora_count = count_moras(&property.pronunciation);
    if property.accent_type > mora_count {
        return Err(DictError::InvalidAccentType {
            accent_type: property.accent_type,
            mora_count,
        });
    }

    let detail = word_type.detail();
    Ok(UserDictWord {
        surface: to_zenkaku(&property.surface),
        priority,
        context_id: detail.context_id,
        part_of_speech: detail.part_of_speech.to_string(),
        part_of_speech_detail_1: detail.part_of_speech_detail_1.to_string(),
        part_of_speech_detail_2: detail.part_of_speech_detail_2.to_string(),
        part_of_speech_detail_3: detail.part_of_speech_detail_3.to_string(),
        inflectional_type: "*".to_string(),
        inflectional_form: "*".to_string(),
        stem: "*".to_string(),
        yomi: property.pronunciation.clone(),
        pronunciation: property.pronunciation,
        accent_type: property.accent_type,
        mora_count,
        accent_associative_rule: "*".to_string(),
    })
}

impl UserDictWord {
    /// 保存済み単語の再検証（インポート経路で使う）
    pub fn validate(&self) -> Result<(), DictError> {
        if self.priority > MAX_PRIORITY {
            return Err(DictError::InvalidPriority(self.priority));
        }
        validate_pronunciation(&self.pronunciation)?;
        let mora_count = count_moras(&self.pronunciation);
        if self.accent_type > mora_count {
            return Err(DictError::InvalidAccentType {
                accent_type: self.accent_type,
                mora_count,
            });
        }
        Ok(())
    }

    /// NAIST-jdic 互換の CSV 1 行を生成する
    pub fn to_csv_line(&self) -> Result<String, DictError> {
        let cost = priority_to_cost(self.context_id, self.priority)?;
        Ok(format!(
            "{surface},{context_id},{context_id},{cost},{part_of_speech},\
             {detail_1},{detail_2},{detail_3},{inflectional_type},\
             {inflectional_form},{stem},{yomi},{pronunciation},\
             {accent_type}/{mora_count},{accent_associative_rule}",
            surface = self.surface,
            context_id = self.context_id,
            cost = cost,
            part_of_speech = self.part_of_speech,
            detail_1 = self.part_of_speech_detail_1,
            detail_2 = self.part_of_speech_detail_2,
            detail_3 = self.part_of_speech_detail_3,
            inflectional_type = self.inflectional_type,
            inflectional_form = self.inflectional_form,
            stem = self.stem,
            yomi = self.yomi,
            pronunciation = self.pronunciation,
            accent_type = self.accent_type,
            mora_count = self.mora_count,
            accent_associative_rule = self.accent_associative_rule,
        ))
    }
}

//! Prosody Context - モーラ / アクセント句モデル
//!
//! 音声合成クエリの骨格となるデータ構造。API の入出力としてそのまま
//! シリアライズされるため、フィールド名は後方互換の対象になる。

use serde::{Deserialize, Serialize};

use super::errors::ProsodyError;
use super::mora_table::mora_phonemes_to_text;

/// モーラ（子音+母音）ごとの情報
///
/// 不変量:
/// - vowel は必ず持つ
/// - consonant_length は consonant がある場合に限り持つ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mora {
    /// 文字（カタカナ表記）
    pub text: String,
    /// 子音の音素
    #[serde(default)]
    pub consonant: Option<String>,
    /// 子音の音長（秒）
    #[serde(default)]
    pub consonant_length: Option<f32>,
    /// 母音の音素
    pub vowel: String,
    /// 母音の音長（秒）
    pub vowel_length: f32,
    /// 音高。0 は無声・無音を表す
    pub pitch: f32,
}

impl Mora {
    /// 音素からモーラを生成する。音長・音高は 0 初期化。
    pub fn from_phonemes(consonant: Option<&str>, vowel: &str) -> Self {
        let phonemes = match consonant {
            Some(c) => format!("{c}{vowel}"),
            None => vowel.to_string(),
        };
        Self {
            text: mora_phonemes_to_text(&phonemes),
            consonant: consonant.map(str::to_string),
            consonant_length: consonant.map(|_| 0.0),
            vowel: vowel.to_string(),
            vowel_length: 0.0,
            pitch: 0.0,
        }
    }

    /// 句読点由来のポーズモーラ
    pub fn pause() -> Self {
        Self {
            text: "、".to_string(),
            consonant: None,
            consonant_length: None,
            vowel: "pau".to_string(),
            vowel_length: 0.0,
            pitch: 0.0,
        }
    }

    /// 前後無音用の無音モーラ
    pub fn silence(length: f32) -> Self {
        Self {
            text: "　".to_string(),
            consonant: None,
            consonant_length: None,
            vowel: "sil".to_string(),
            vowel_length: length,
            pitch: 0.0,
        }
    }

    /// 無声化モーラか（母音音素が大文字）
    pub fn is_unvoiced(&self) -> bool {
        matches!(self.vowel.as_str(), "A" | "I" | "U" | "E" | "O")
    }

    /// ポーズ・無音モーラか
    pub fn is_pause(&self) -> bool {
        matches!(self.vowel.as_str(), "pau" | "sil")
    }

    /// 不変量の検証
    pub fn validate(&self) -> Result<(), ProsodyError> {
        if self.consonant.is_some() != self.consonant_length.is_some() {
            return Err(ProsodyError::InconsistentConsonant {
                text: self.text.clone(),
            });
        }
        Ok(())
    }
}

/// アクセント句ごとの情報
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccentPhrase {
    /// モーラのリスト
    pub moras: Vec<Mora>,
    /// アクセント核の位置（1 始まり）
    pub accent: usize,
    /// 句末に無音を付ける場合のポーズモーラ
    #[serde(default)]
    pub pause_mora: Option<Mora>,
    /// 疑問形か否か
    #[serde(default)]
    pub is_interrogative: bool,
}

impl AccentPhrase {
    /// 検証付きでアクセント句を生成する
    pub fn new(
        moras: Vec<Mora>,
        accent: usize,
        pause_mora: Option<Mora>,
        is_interrogative: bool,
    ) -> Result<Self, ProsodyError> {
        let phrase = Self {
            moras,
            accent,
            pause_mora,
            is_interrogative,
        };
        phrase.validate()?;
        Ok(phrase)
    }

    /// 不変量の検証: 1 <= accent <= モーラ数、各モーラの整合性
    pub fn validate(&self) -> Result<(), ProsodyError> {
        if self.moras.is_empty() {
            return Err(ProsodyError::EmptyAccentPhrase);
        }
        if self.accent < 1 || self.accent > self.moras.len() {
            return Err(ProsodyError::AccentOutOfRange {
                accent: self.accent,
                mora_count: self.moras.len(),
            });
        }
        for mora in self.moras.iter().chain(self.pause_mora.iter()) {
            mora.validate()?;
        }
        Ok(())
    }
}

/// アクセント句系列全体の検証
pub fn validate_accent_phrases(phrases: &[AccentPhrase]) -> Result<(), ProsodyError> {
    phrases.iter().try_for_each(AccentPhrase::validate)
}

/// アクセント句系列からモーラ系列を取り出す（ポーズモーラ含む）
pub fn to_flatten_moras(phrases: &[AccentPhrase]) -> Vec<Mora> {
    let mut moras = Vec::new();
    for phrase in phrases {
        moras.extend(phrase.moras.iter().cloned());
        if let Some(pause) = &phrase.pause_mora {
            moras.push(pause.clone());
        }
    }
    moras
}

//! 品詞ごとの NAIST-jdic 文脈情報
//!
//! 文脈 ID とコスト候補は open_jtalk 同梱の mecab-naist-jdic に由来する。
//! コスト候補は優先度 0..=10 に対応する 11 段のパーセンタイル値。

use serde::{Deserialize, Serialize};

use super::errors::DictError;

/// 辞書登録時に選べる品詞種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WordTypes {
    ProperNoun,
    CommonNoun,
    Verb,
    Adjective,
    Suffix,
}

/// 品詞ごとの辞書情報
#[derive(Debug, Clone, Copy)]
pub struct PartOfSpeechDetail {
    pub part_of_speech: &'static str,
    pub part_of_speech_detail_1: &'static str,
    pub part_of_speech_detail_2: &'static str,
    pub part_of_speech_detail_3: &'static str,
    /// 辞書の左・右文脈 ID
    pub context_id: i32,
    /// 優先度 10..=0 に対応するコスト
    pub cost_candidates: &'static [i32],
}

pub const MAX_PRIORITY: u32 = 10;

const COSTS_PROPER_NOUN: &[i32] = &[
    -988, 3488, 4768, 6048, 7328, 8609, 8734, 8859, 8984, 9110, 14176,
];
const COSTS_COMMON_NOUN: &[i32] = &[
    -4445, 49, 1473, 2897, 4321, 5746, 6554, 7362, 8170, 8979, 15001,
];
const COSTS_VERB: &[i32] = &[
    3100, 6160, 6360, 6561, 6761, 6962, 7414, 7866, 8318, 8771, 13433,
];
const COSTS_ADJECTIVE: &[i32] = &[
    1527, 3266, 3561, 3857, 4153, 4449, 5149, 5849, 6549, 7250, 10001,
];
const COSTS_SUFFIX: &[i32] = &[
    4399, 5373, 6041, 6710, 7378, 8047, 9440, 10834, 12228, 13622, 15847,
];

impl WordTypes {
    pub fn detail(self) -> PartOfSpeechDetail {
        match self {
            WordTypes::ProperNoun => PartOfSpeechDetail {
                part_of_speech: "名詞",
                part_of_speech_detail_1: "固有名詞",
                part_of_speech_detail_2: "一般",
                part_of_speech_detail_3: "*",
                context_id: 1348,
                cost_candidates: COSTS_PROPER_NOUN,
            },
            WordTypes::CommonNoun => PartOfSpeechDetail {
                part_of_speech: "名詞",
                part_of_speech_detail_1: "一般",
                part_of_speech_detail_2: "*",
                part_of_speech_detail_3: "*",
                context_id: 1345,
                cost_candidates: COSTS_COMMON_NOUN,
            },
            WordTypes::Verb => PartOfSpeechDetail {
                part_of_speech: "動詞",
                part_of_speech_detail_1: "自立",
                part_of_speech_detail_2: "*",
                part_of_speech_detail_3: "*",
                context_id: 642,
                cost_candidates: COSTS_VERB,
            },
            WordTypes::Adjective => PartOfSpeechDetail {
                part_of_speech: "形容詞",
                part_of_speech_detail_1: "自立",
                part_of_speech_detail_2: "*",
                part_of_speech_detail_3: "*",
                context_id: 20,
                cost_candidates: COSTS_ADJECTIVE,
            },
            WordTypes::Suffix => PartOfSpeechDetail {
                part_of_speech: "名詞",
                part_of_speech_detail_1: "接尾",
                part_of_speech_detail_2: "一般",
                part_of_speech_detail_3: "*",
                context_id: 1358,
                cost_candidates: COSTS_SUFFIX,
            },
        }
    }

    const ALL: [WordTypes; 5] = [
        WordTypes::ProperNoun,
        WordTypes::CommonNoun,
        WordTypes::Verb,
        WordTypes::Adjective,
        WordTypes::Suffix,
    ];
}

fn cost_candidates_for(context_id: i32) -> Result<&'static [i32], DictError> {
    WordTypes::ALL
        .iter()
        .map(|t| t.detail())
        .find(|d| d.context_id == context_id)
        .map(|d| d.cost_candidates)
        .ok_or_else(|| DictError::UnknownWordType(format!("context_id={context_id}")))
}

/// 優先度を辞書コストへ変換する
pub fn priority_to_cost(context_id: i32, priority: u32) -> Result<i32, DictError> {
    if priority > MAX_PRIORITY {
        return Err(DictError::InvalidPriority(priority));
    }
    let candidates = cost_candidates_for(context_id)?;
    Ok(candidates[(MAX_PRIORITY - priority) as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_to_cost_proper_noun() {
        assert_eq!(priority_to_cost(1348, 10).unwrap(), -988);
        assert_eq!(priority_to_cost(1348, 5).unwrap(), 8609);
        assert_eq!(priority_to_cost(1348, 0).unwrap(), 14176);
    }

    #[test]
    fn test_priority_out_of_range() {
        assert_eq!(
            priority_to_cost(1348, 11).unwrap_err(),
            DictError::InvalidPriority(11)
        );
    }

    #[test]
    fn test_cost_decreases_as_priority_rises() {
        for word_type in WordTypes::ALL {
            let context_id = word_type.detail().context_id;
            let costs: Vec<i32> = (0..=MAX_PRIORITY)
                .map(|priority| priority_to_cost(context_id, priority).unwrap())
                .collect();
            assert!(costs.windows(2).all(|w| w[0] > w[1]));
        }
    }

    #[test]
    fn test_unknown_context_id() {
        assert!(matches!(
            priority_to_cost(999, 5),
            Err(DictError::UnknownWordType(_))
        ));
    }

    #[test]
    fn test_word_type_serializes_screaming_snake() {
        let json = serde_json::to_string(&WordTypes::ProperNoun).unwrap();
        assert_eq!(json, "\"PROPER_NOUN\"");
    }
}

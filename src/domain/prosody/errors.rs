//! Prosody Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProsodyError {
    /// アクセント核の位置がモーラ数の範囲外
    #[error("アクセント位置が不正です: accent={accent}, モーラ数={mora_count}")]
    AccentOutOfRange { accent: usize, mora_count: usize },

    /// 子音と子音長の有無が一致しない
    #[error("モーラ「{text}」の子音と子音長の指定が一致しません")]
    InconsistentConsonant { text: String },

    /// モーラが空のアクセント句
    #[error("モーラを持たないアクセント句があります")]
    EmptyAccentPhrase,

    /// 全上下文ラベルとして解釈できない
    #[error("全上下文ラベルを解釈できません: {feature}")]
    MalformedFeature { feature: String },

    /// 1モーラに3音素以上が割り当てられている
    #[error("モーラの音素構成が不正です: {phonemes:?}")]
    InvalidMoraPhonemes { phonemes: Vec<String> },
}

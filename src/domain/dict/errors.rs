//! Dict Context - Errors

use thiserror::Error;

/// ユーザー辞書の単語として受け入れられない入力のエラー
#[derive(Debug, Error, PartialEq)]
pub enum DictError {
    /// カタカナ以外、または捨て仮名の並びが不正な発音
    #[error("無効な発音です: {0}")]
    InvalidPronunciation(String),

    /// アクセント型がモーラ数の範囲外
    #[error("誤ったアクセント型です({accent_type})。0 <= accent_type <= {mora_count} でなければなりません")]
    InvalidAccentType { accent_type: usize, mora_count: usize },

    /// 優先度が範囲外
    #[error("優先度の値が無効です: {0}")]
    InvalidPriority(u32),

    /// 未知の品詞種別
    #[error("不明な品詞です: {0}")]
    UnknownWordType(String),
}

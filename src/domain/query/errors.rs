//! Query Context - Errors

use thiserror::Error;

use crate::domain::prosody::ProsodyError;

/// 後方互換レイヤのエラー
///
/// 「AudioQuery ではない」(構造エラー) と「AudioQuery だが値が不正」
/// (検証エラー) を区別する。
#[derive(Debug, Error)]
pub enum CompatError {
    /// AudioQuery として認識できない構造
    #[error("AudioQuery として解釈できません: {reason}")]
    NotAnAudioQuery { reason: String },

    /// 既知の形だがフィールド値が不正
    #[error("AudioQuery のフィールドが不正です: {0}")]
    InvalidQuery(String),

    /// アクセント句の不変量違反
    #[error(transparent)]
    Validation(#[from] ProsodyError),
}

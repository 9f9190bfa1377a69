//! アプリケーション層のエラー定義
//!
//! コマンド・クエリ共通のエラー型。領域層とポートのエラーを
//! 集約し、HTTP 層がステータスコードへ写像できる粒度を保つ。

use thiserror::Error;

use crate::application::ports::{AnalyzerError, CoreError, PresetError, StoreError};
use crate::domain::dict::DictError;
use crate::domain::kana::KanaParseError;
use crate::domain::prosody::ProsodyError;
use crate::domain::query::CompatError;

/// アプリケーション層エラー
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// リソース未検出
    #[error("{resource_type} が見つかりません: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// AquesTalk 風記法の構文エラー（利用者入力起因）
    #[error(transparent)]
    InvalidKana(#[from] KanaParseError),

    /// ユーザー辞書の単語として不正
    #[error(transparent)]
    InvalidWord(#[from] DictError),

    /// AudioQuery の構造・値の不正
    #[error(transparent)]
    InvalidQuery(#[from] CompatError),

    /// アクセント句の不変量違反
    #[error(transparent)]
    Prosody(#[from] ProsodyError),

    /// 解析器の失敗
    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),

    /// 合成核の失敗（キャンセル含む）
    #[error(transparent)]
    Core(#[from] CoreError),

    /// 辞書ストアの失敗
    #[error(transparent)]
    Store(#[from] StoreError),

    /// プリセットストアの失敗
    #[error(transparent)]
    Preset(#[from] PresetError),
}

impl ApplicationError {
    /// NotFound エラーを生成する
    pub fn not_found(resource_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// 協調キャンセルによる中断かどうか
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Core(CoreError::Cancelled))
    }
}

//! Kana Context - Errors
//!
//! AquesTalk 風記法の文法違反はユーザー入力の誤りとして呼び出し元へ
//! 返すため、句番号・該当文字列を必ず持たせる。

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KanaParseError {
    /// 判別できない読み仮名
    #[error("{phrase}番目のアクセント句に判別できない読み仮名があります: {text}")]
    UnknownText { phrase: usize, text: String },

    /// 句頭のアクセント記号
    #[error("{phrase}番目のアクセント句の句頭にアクセントは置けません: {text}")]
    AccentOnPhraseTop { phrase: usize, text: String },

    /// アクセント記号の重複
    #[error("{phrase}番目のアクセント句に二つ以上のアクセントは置けません: {text}")]
    DuplicateAccent { phrase: usize, text: String },

    /// アクセント記号なし
    #[error("{phrase}番目のアクセント句にアクセントが指定されていません: {text}")]
    MissingAccent { phrase: usize, text: String },

    /// 空のアクセント句
    #[error("{position}番目のアクセント句が空白です")]
    EmptyPhrase { position: usize },

    /// 句末以外の疑問符
    #[error("{phrase}番目のアクセント句の句末以外に「？」は置けません: {text}")]
    InterrogativeNotAtEnd { phrase: usize, text: String },
}

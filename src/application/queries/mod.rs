//! アプリケーション層 - クエリ（読み取り操作）
//!
//! CQRS のクエリ側。アクセント句・AudioQuery の構築と
//! 辞書・プリセットの参照を扱う

mod dict_queries;
mod preset_queries;
mod tts_queries;

pub mod handlers;

pub use dict_queries::*;
pub use preset_queries::*;
pub use tts_queries::*;

//! Persistence Layer - データ永続化
//!
//! ファイルベースのストア実装

pub mod file;

pub use file::{FilePresetStore, FileUserDictStore};

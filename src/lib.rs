//! Hibiki - 日本語音声合成エンジン
//!
//! アーキテクチャ: DDD + CQRS + Hexagonal Architecture
//!
//! 領域層 (domain/):
//! - Prosody Context: フルコンテキストラベル → アクセント句
//! - Kana Context: AquesTalk 風記法の読み書き
//! - Query Context: AudioQuery の組み立て・互換受理・パラメータ適用
//! - Dict Context: ユーザー辞書の単語と検証
//!
//! 応用層 (application/):
//! - Ports: TextAnalyzer / SynthesisCore / UserDictStore / PresetStore
//! - Commands: 辞書編集・プリセット編集・音声合成
//! - Queries: AudioQuery / アクセント句の構築、韻律再計算
//!
//! 基盤層 (infrastructure/):
//! - HTTP: 本家 ENGINE 互換の RESTful API
//! - Memory: 解析器スナップショットの共有
//! - Persistence: 辞書 JSON/CSV・プリセット TOML のファイルストア
//! - Adapters: jpreprocess 解析器、決定的な合成核

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};

/// エンジンのバージョン
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

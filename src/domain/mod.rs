//! Domain Layer - 領域層
//!
//! 4 つの限界付けられたコンテキストを含む:
//! - Prosody Context: アクセント句の構築と韻律整合
//! - Kana Context: AquesTalk 風記法のコーデック
//! - Query Context: AudioQuery の組み立てと後方互換
//! - Dict Context: ユーザー辞書の語彙モデル

pub mod dict;
pub mod kana;
pub mod prosody;
pub mod query;

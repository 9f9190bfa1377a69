//! Infrastructure Adapters
//!
//! ヘキサゴナルアーキテクチャのアダプタ実装

pub mod analyzer;
pub mod core;

pub use analyzer::{JPreprocessAnalyzer, JPreprocessAnalyzerFactory};
pub use core::MockSynthesisCore;

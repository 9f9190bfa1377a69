//! Infrastructure Layer - 基盤層
//!
//! すべてのポートの具体実装を提供する

pub mod adapters;
pub mod http;
pub mod memory;
pub mod persistence;

pub use adapters::{JPreprocessAnalyzerFactory, MockSynthesisCore};
pub use memory::SharedAnalyzer;
pub use persistence::{FilePresetStore, FileUserDictStore};

//! Analyzer Adapters

mod jpreprocess_analyzer;

pub use jpreprocess_analyzer::{JPreprocessAnalyzer, JPreprocessAnalyzerFactory};

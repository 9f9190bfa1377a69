//! Memory Layer - プロセス内共有状態
//!
//! 解析器スナップショットの原子的な共有を実装する

mod shared_analyzer;

pub use shared_analyzer::SharedAnalyzer;

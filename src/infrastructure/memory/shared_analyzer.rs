//! Shared Analyzer - 解析器スナップショットの共有
//!
//! 現用の解析器を `RwLock<Arc<...>>` で保持する。読み手はロックを
//! 一瞬だけ取って Arc をクローンし、以後はロック外でスナップショットを
//! 使う。書き手は完成済みの解析器を丸ごと差し替えるだけなので、
//! 読み手が作りかけの辞書を観測することはない。

use std::sync::{Arc, RwLock};

use crate::application::ports::{AnalyzerSnapshotPort, TextAnalyzerPort};

/// 解析器スナップショットの保持者
pub struct SharedAnalyzer {
    current: RwLock<Arc<dyn TextAnalyzerPort>>,
}

impl SharedAnalyzer {
    pub fn new(initial: Arc<dyn TextAnalyzerPort>) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }
}

impl AnalyzerSnapshotPort for SharedAnalyzer {
    fn current(&self) -> Arc<dyn TextAnalyzerPort> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn replace(&self, next: Arc<dyn TextAnalyzerPort>) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = next;
        tracing::debug!("解析器スナップショットを差し替え");
    }
}

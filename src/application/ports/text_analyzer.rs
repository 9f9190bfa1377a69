//! Text Analyzer Port - 形態素解析器の抽象
//!
//! テキストをフルコンテキストラベル列へ変換する解析器と、
//! ユーザー辞書を組み込んだ解析器を新規構築するファクトリ、
//! そして現用スナップショットの差し替え口を定義する。
//! 具体実装は infrastructure/adapters/analyzer 層にある。

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

/// 解析器のエラー
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// システム辞書・ユーザー辞書の読み込み失敗（起動時は致命的）
    #[error("辞書の読み込みに失敗しました: {0}")]
    DictionaryLoad(String),

    /// 解析そのものの失敗
    #[error("テキスト解析に失敗しました: {0}")]
    AnalysisFailed(String),
}

/// Text Analyzer Port
///
/// テキスト 1 つにつき音素ごとのフルコンテキストラベル文字列を返す。
/// 解析は CPU バウンドかつ短時間なので同期インターフェースとする。
pub trait TextAnalyzerPort: Send + Sync {
    fn analyze(&self, text: &str) -> Result<Vec<String>, AnalyzerError>;
}

/// Analyzer Factory Port
///
/// ユーザー辞書 CSV を組み込んだ解析器を一から構築する。
/// 差し替えは常に「完全な新インスタンスの構築 → スワップ」で行い、
/// 既存インスタンスの書き換えは決して行わない。
pub trait AnalyzerFactoryPort: Send + Sync {
    fn build(
        &self,
        user_dict_csv: Option<&Path>,
    ) -> Result<Arc<dyn TextAnalyzerPort>, AnalyzerError>;
}

/// Analyzer Snapshot Port
///
/// 現用の解析器スナップショットを保持する。読み手は Arc を 1 回
/// クローンしてリクエストの間それを使い続ける。
pub trait AnalyzerSnapshotPort: Send + Sync {
    /// 現在のスナップショットを取得する
    fn current(&self) -> Arc<dyn TextAnalyzerPort>;

    /// 完成済みの解析器へ原子的に差し替える
    fn replace(&self, next: Arc<dyn TextAnalyzerPort>);
}

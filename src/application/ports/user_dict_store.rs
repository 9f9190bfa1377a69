//! User Dict Store Port - ユーザー辞書の永続化抽象
//!
//! 単語表（UUID キーの JSON）の読み書きと、解析器コンパイル入力に
//! なる NAIST-jdic 互換 CSV の書き出しを定義する。

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::dict::{DictError, UserDictWord};

/// 辞書ストアのエラー
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("辞書ファイルの入出力に失敗しました: {0}")]
    Io(#[from] std::io::Error),

    #[error("辞書ファイルの形式が不正です: {0}")]
    Format(String),

    #[error(transparent)]
    InvalidWord(#[from] DictError),
}

/// User Dict Store Port
#[async_trait]
pub trait UserDictStorePort: Send + Sync {
    /// 保存済みの単語表を読み込む。ファイルが無ければ空表を返す
    async fn load(&self) -> Result<HashMap<Uuid, UserDictWord>, StoreError>;

    /// 単語表を丸ごと保存する
    async fn save(&self, words: &HashMap<Uuid, UserDictWord>) -> Result<(), StoreError>;

    /// 単語表を解析器コンパイル用の CSV として書き出し、そのパスを返す
    ///
    /// 空表のときは None を返す（ユーザー辞書なしで解析器を組む）。
    async fn write_csv(
        &self,
        words: &HashMap<Uuid, UserDictWord>,
    ) -> Result<Option<PathBuf>, StoreError>;
}

//! File User Dict Store - ユーザー辞書のファイル永続化
//!
//! 単語表は UUID キーの JSON として保存し、解析器の再構築時には
//! NAIST-jdic 互換の CSV へ書き出す。JSON が正本で CSV は常に
//! 単語表から再生成される派生物。

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::{StoreError, UserDictStorePort};
use crate::domain::dict::UserDictWord;

/// JSON + CSV によるユーザー辞書ストア
pub struct FileUserDictStore {
    json_path: PathBuf,
    csv_path: PathBuf,
}

impl FileUserDictStore {
    pub fn new(json_path: impl Into<PathBuf>, csv_path: impl Into<PathBuf>) -> Self {
        Self {
            json_path: json_path.into(),
            csv_path: csv_path.into(),
        }
    }

    async fn ensure_parent(path: &PathBuf) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl UserDictStorePort for FileUserDictStore {
    async fn load(&self) -> Result<HashMap<Uuid, UserDictWord>, StoreError> {
        let content = match tokio::fs::read_to_string(&self.json_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(HashMap::new());
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&content).map_err(|e| StoreError::Format(e.to_string()))
    }

    async fn save(&self, words: &HashMap<Uuid, UserDictWord>) -> Result<(), StoreError> {
        Self::ensure_parent(&self.json_path).await?;
        let content = serde_json::to_string_pretty(words)
            .map_err(|e| StoreError::Format(e.to_string()))?;
        tokio::fs::write(&self.json_path, content).await?;

        tracing::info!(path = %self.json_path.display(), words = words.len(), "ユーザー辞書を保存");
        Ok(())
    }

    async fn write_csv(
        &self,
        words: &HashMap<Uuid, UserDictWord>,
    ) -> Result<Option<PathBuf>, StoreError> {
        if words.is_empty() {
            return Ok(None);
        }

        Self::ensure_parent(&self.csv_path).await?;
        // 行順をキーで固定し、差分確認しやすい CSV にする
        let mut entries: Vec<_> = words.iter().collect();
        entries.sort_by_key(|(uuid, _)| **uuid);

        let mut content = String::new();
        for (_, word) in entries {
            content.push_str(&word.to_csv_line()?);
            content.push('\n');
        }
        tokio::fs::write(&self.csv_path, content).await?;

        Ok(Some(self.csv_path.clone()))
    }
}

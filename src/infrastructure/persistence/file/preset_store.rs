//! File Preset Store - プリセットの TOML 永続化
//!
//! プリセット一覧を TOML ファイルで保持する。読み込みは mtime を
//! 鍵にしたキャッシュ経由で行い、エディタ等でファイルが外部更新
//! された場合も次の読み込みで反映される。

use std::path::PathBuf;
use std::time::SystemTime;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::application::ports::{Preset, PresetError, PresetStorePort};

/// TOML 直列化用の外枠（`[[presets]]` テーブル配列になる）
#[derive(Debug, Default, Serialize, Deserialize)]
struct PresetFile {
    #[serde(default)]
    presets: Vec<Preset>,
}

/// mtime キャッシュ付きプリセットストア
pub struct FilePresetStore {
    path: PathBuf,
    cache: Mutex<Option<(SystemTime, Vec<Preset>)>>,
}

impl FilePresetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    async fn modified(&self) -> Result<Option<SystemTime>, PresetError> {
        match tokio::fs::metadata(&self.path).await {
            Ok(meta) => Ok(Some(meta.modified()?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn read_file(&self) -> Result<Vec<Preset>, PresetError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let file: PresetFile =
            toml::from_str(&content).map_err(|e| PresetError::Format(e.to_string()))?;
        Ok(file.presets)
    }
}

#[async_trait]
impl PresetStorePort for FilePresetStore {
    async fn load(&self) -> Result<Vec<Preset>, PresetError> {
        let mut cache = self.cache.lock().await;

        let Some(mtime) = self.modified().await? else {
            *cache = None;
            return Ok(Vec::new());
        };
        if let Some((cached_mtime, presets)) = cache.as_ref() {
            if *cached_mtime == mtime {
                return Ok(presets.clone());
            }
        }

        let presets = self.read_file().await?;
        tracing::debug!(path = %self.path.display(), count = presets.len(), "プリセットを再読込");
        *cache = Some((mtime, presets.clone()));
        Ok(presets)
    }

    async fn save(&self, presets: &[Preset]) -> Result<(), PresetError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let file = PresetFile {
            presets: presets.to_vec(),
        };
        let content =
            toml::to_string_pretty(&file).map_err(|e| PresetError::Format(e.to_string()))?;
        tokio::fs::write(&self.path, content).await?;

        let mut cache = self.cache.lock().await;
        *cache = self.modified().await?.map(|mtime| (mtime, presets.to_vec()));

        tracing::info!(path = %self.path.display(), count = presets.len(), "プリセットを保存");
        Ok(())
    }
}

//! User Dict Command Handlers
//!
//! 書き込み操作は「単語表を更新 → JSON 保存 → CSV 書き出し →
//! 解析器を一から再構築 → スナップショット差し替え」という単一の
//! 排他的更新経路を通る。読み手は旧スナップショットを使い続ける。

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::application::commands::{ApplyWord, DeleteWord, ImportUserDict, RewriteWord};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    AnalyzerError, AnalyzerFactoryPort, AnalyzerSnapshotPort, UserDictStorePort,
};
use crate::domain::dict::{create_word, UserDictWord};

/// 辞書更新（読み出し → 変更 → 永続化 → 再構築）を直列化するロック。
/// 4 つの更新ハンドラで同じものを共有する
pub type DictUpdateLock = Arc<Mutex<()>>;

/// 更新後の単語表を永続化し、解析器を再構築して差し替える
async fn persist_and_rebuild(
    store: &Arc<dyn UserDictStorePort>,
    factory: &Arc<dyn AnalyzerFactoryPort>,
    snapshot: &Arc<dyn AnalyzerSnapshotPort>,
    words: &HashMap<Uuid, UserDictWord>,
) -> Result<(), ApplicationError> {
    store.save(words).await?;
    let csv_path = store.write_csv(words).await?;

    // 辞書コンパイルは CPU バウンドなので blocking タスクで行う
    let factory = Arc::clone(factory);
    let analyzer = tokio::task::spawn_blocking(move || factory.build(csv_path.as_deref()))
        .await
        .map_err(|e| {
            AnalyzerError::DictionaryLoad(format!("辞書再構築タスクが中断されました: {e}"))
        })??;

    snapshot.replace(analyzer);
    Ok(())
}

// ============================================================================
// ApplyWord
// ============================================================================

/// ApplyWord Handler
pub struct ApplyWordHandler {
    store: Arc<dyn UserDictStorePort>,
    factory: Arc<dyn AnalyzerFactoryPort>,
    snapshot: Arc<dyn AnalyzerSnapshotPort>,
    update_lock: DictUpdateLock,
}

impl ApplyWordHandler {
    pub fn new(
        store: Arc<dyn UserDictStorePort>,
        factory: Arc<dyn AnalyzerFactoryPort>,
        snapshot: Arc<dyn AnalyzerSnapshotPort>,
        update_lock: DictUpdateLock,
    ) -> Self {
        Self {
            store,
            factory,
            snapshot,
            update_lock,
        }
    }

    pub async fn handle(&self, command: ApplyWord) -> Result<Uuid, ApplicationError> {
        let word = create_word(command.property)?;
        let word_uuid = Uuid::new_v4();

        let _guard = self.update_lock.lock().await;
        let mut words = self.store.load().await?;
        words.insert(word_uuid, word);
        persist_and_rebuild(&self.store, &self.factory, &self.snapshot, &words).await?;

        tracing::info!(word_uuid = %word_uuid, word_count = words.len(), "辞書へ単語を追加");
        Ok(word_uuid)
    }
}

// ============================================================================
// RewriteWord
// ============================================================================

/// RewriteWord Handler
pub struct RewriteWordHandler {
    store: Arc<dyn UserDictStorePort>,
    factory: Arc<dyn AnalyzerFactoryPort>,
    snapshot: Arc<dyn AnalyzerSnapshotPort>,
    update_lock: DictUpdateLock,
}

impl RewriteWordHandler {
    pub fn new(
        store: Arc<dyn UserDictStorePort>,
        factory: Arc<dyn AnalyzerFactoryPort>,
        snapshot: Arc<dyn AnalyzerSnapshotPort>,
        update_lock: DictUpdateLock,
    ) -> Self {
        Self {
            store,
            factory,
            snapshot,
            update_lock,
        }
    }

    pub async fn handle(&self, command: RewriteWord) -> Result<(), ApplicationError> {
        let word = create_word(command.property)?;

        let _guard = self.update_lock.lock().await;
        let mut words = self.store.load().await?;
        if !words.contains_key(&command.word_uuid) {
            return Err(ApplicationError::not_found("単語", command.word_uuid));
        }
        words.insert(command.word_uuid, word);
        persist_and_rebuild(&self.store, &self.factory, &self.snapshot, &words).await?;

        tracing::info!(word_uuid = %command.word_uuid, "辞書の単語を更新");
        Ok(())
    }
}

// ============================================================================
// DeleteWord
// ============================================================================

/// DeleteWord Handler
pub struct DeleteWordHandler {
    store: Arc<dyn UserDictStorePort>,
    factory: Arc<dyn AnalyzerFactoryPort>,
    snapshot: Arc<dyn AnalyzerSnapshotPort>,
    update_lock: DictUpdateLock,
}

impl DeleteWordHandler {
    pub fn new(
        store: Arc<dyn UserDictStorePort>,
        factory: Arc<dyn AnalyzerFactoryPort>,
        snapshot: Arc<dyn AnalyzerSnapshotPort>,
        update_lock: DictUpdateLock,
    ) -> Self {
        Self {
            store,
            factory,
            snapshot,
            update_lock,
        }
    }

    pub async fn handle(&self, command: DeleteWord) -> Result<(), ApplicationError> {
        let _guard = self.update_lock.lock().await;
        let mut words = self.store.load().await?;
        if words.remove(&command.word_uuid).is_none() {
            return Err(ApplicationError::not_found("単語", command.word_uuid));
        }
        persist_and_rebuild(&self.store, &self.factory, &self.snapshot, &words).await?;

        tracing::info!(word_uuid = %command.word_uuid, "辞書から単語を削除");
        Ok(())
    }
}

// ============================================================================
// ImportUserDict
// ============================================================================

/// ImportUserDict Handler
pub struct ImportUserDictHandler {
    store: Arc<dyn UserDictStorePort>,
    factory: Arc<dyn AnalyzerFactoryPort>,
    snapshot: Arc<dyn AnalyzerSnapshotPort>,
    update_lock: DictUpdateLock,
}

impl ImportUserDictHandler {
    pub fn new(
        store: Arc<dyn UserDictStorePort>,
        factory: Arc<dyn AnalyzerFactoryPort>,
        snapshot: Arc<dyn AnalyzerSnapshotPort>,
        update_lock: DictUpdateLock,
    ) -> Self {
        Self {
            store,
            factory,
            snapshot,
            update_lock,
        }
    }

    pub async fn handle(&self, command: ImportUserDict) -> Result<(), ApplicationError> {
        // 取り込む前に全単語を再検証する。1 語でも不正なら全体を拒否
        for word in command.words.values() {
            word.validate()?;
        }

        let _guard = self.update_lock.lock().await;
        let mut words = self.store.load().await?;
        for (word_uuid, word) in command.words {
            if command.override_existing || !words.contains_key(&word_uuid) {
                words.insert(word_uuid, word);
            }
        }
        persist_and_rebuild(&self.store, &self.factory, &self.snapshot, &words).await?;

        tracing::info!(word_count = words.len(), "辞書をインポート");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::application::ports::{StoreError, TextAnalyzerPort};
    use crate::domain::dict::WordProperty;

    struct MemoryStore {
        words: Mutex<HashMap<Uuid, UserDictWord>>,
    }

    #[async_trait]
    impl UserDictStorePort for MemoryStore {
        async fn load(&self) -> Result<HashMap<Uuid, UserDictWord>, StoreError> {
            Ok(self.words.lock().unwrap().clone())
        }

        async fn save(&self, words: &HashMap<Uuid, UserDictWord>) -> Result<(), StoreError> {
            *self.words.lock().unwrap() = words.clone();
            Ok(())
        }

        async fn write_csv(
            &self,
            words: &HashMap<Uuid, UserDictWord>,
        ) -> Result<Option<PathBuf>, StoreError> {
            if words.is_empty() {
                Ok(None)
            } else {
                Ok(Some(PathBuf::from("/tmp/user_dict.csv")))
            }
        }
    }

    struct StubAnalyzer;

    impl TextAnalyzerPort for StubAnalyzer {
        fn analyze(&self, _text: &str) -> Result<Vec<String>, AnalyzerError> {
            Ok(vec![])
        }
    }

    struct CountingFactory {
        builds: AtomicUsize,
    }

    impl AnalyzerFactoryPort for CountingFactory {
        fn build(
            &self,
            _user_dict_csv: Option<&Path>,
        ) -> Result<Arc<dyn TextAnalyzerPort>, AnalyzerError> {
            self.builds.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(StubAnalyzer))
        }
    }

    struct StubSnapshot {
        swaps: AtomicUsize,
    }

    impl AnalyzerSnapshotPort for StubSnapshot {
        fn current(&self) -> Arc<dyn TextAnalyzerPort> {
            Arc::new(StubAnalyzer)
        }

        fn replace(&self, _next: Arc<dyn TextAnalyzerPort>) {
            self.swaps.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Fixture {
        store: Arc<MemoryStore>,
        factory: Arc<CountingFactory>,
        snapshot: Arc<StubSnapshot>,
        update_lock: DictUpdateLock,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                store: Arc::new(MemoryStore {
                    words: Mutex::new(HashMap::new()),
                }),
                factory: Arc::new(CountingFactory {
                    builds: AtomicUsize::new(0),
                }),
                snapshot: Arc::new(StubSnapshot {
                    swaps: AtomicUsize::new(0),
                }),
                update_lock: DictUpdateLock::default(),
            }
        }

        fn ports(
            &self,
        ) -> (
            Arc<dyn UserDictStorePort>,
            Arc<dyn AnalyzerFactoryPort>,
            Arc<dyn AnalyzerSnapshotPort>,
            DictUpdateLock,
        ) {
            (
                self.store.clone(),
                self.factory.clone(),
                self.snapshot.clone(),
                self.update_lock.clone(),
            )
        }
    }

    fn property(surface: &str, pronunciation: &str, accent_type: usize) -> WordProperty {
        WordProperty {
            surface: surface.to_string(),
            pronunciation: pronunciation.to_string(),
            accent_type,
            word_type: None,
            priority: None,
        }
    }

    #[tokio::test]
    async fn test_apply_word_saves_and_rebuilds() {
        let fixture = Fixture::new();
        let (store, factory, snapshot, lock) = fixture.ports();
        let handler = ApplyWordHandler::new(store, factory, snapshot, lock);

        let word_uuid = handler
            .handle(ApplyWord {
                property: property("test", "テスト", 1),
            })
            .await
            .unwrap();

        let stored = fixture.store.words.lock().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[&word_uuid].pronunciation, "テスト");
        assert_eq!(fixture.factory.builds.load(Ordering::SeqCst), 1);
        assert_eq!(fixture.snapshot.swaps.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_apply_word_rejects_invalid_pronunciation() {
        let fixture = Fixture::new();
        let (store, factory, snapshot, lock) = fixture.ports();
        let handler = ApplyWordHandler::new(store, factory, snapshot, lock);

        let result = handler
            .handle(ApplyWord {
                property: property("test", "test", 1),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::InvalidWord(_))));
        // 不正な単語では再構築は走らない
        assert_eq!(fixture.factory.builds.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_rewrite_missing_word_is_not_found() {
        let fixture = Fixture::new();
        let (store, factory, snapshot, lock) = fixture.ports();
        let handler = RewriteWordHandler::new(store, factory, snapshot, lock);

        let result = handler
            .handle(RewriteWord {
                word_uuid: Uuid::new_v4(),
                property: property("test", "テスト", 1),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_word_removes_entry() {
        let fixture = Fixture::new();
        let (store, factory, snapshot, lock) = fixture.ports();
        let apply = ApplyWordHandler::new(store, factory, snapshot, lock);
        let word_uuid = apply
            .handle(ApplyWord {
                property: property("test", "テスト", 1),
            })
            .await
            .unwrap();

        let (store, factory, snapshot, lock) = fixture.ports();
        let delete = DeleteWordHandler::new(store, factory, snapshot, lock);
        delete.handle(DeleteWord { word_uuid }).await.unwrap();

        assert!(fixture.store.words.lock().unwrap().is_empty());
        assert_eq!(fixture.snapshot.swaps.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_import_respects_override_flag() {
        let fixture = Fixture::new();
        let (store, factory, snapshot, lock) = fixture.ports();
        let apply = ApplyWordHandler::new(store, factory, snapshot, lock);
        let existing_uuid = apply
            .handle(ApplyWord {
                property: property("test", "テスト", 1),
            })
            .await
            .unwrap();

        let incoming = create_word(property("test", "ケンショウ", 0)).unwrap();
        let mut imported = HashMap::new();
        imported.insert(existing_uuid, incoming.clone());

        let (store, factory, snapshot, lock) = fixture.ports();
        let import = ImportUserDictHandler::new(store, factory, snapshot, lock);
        import
            .handle(ImportUserDict {
                words: imported.clone(),
                override_existing: false,
            })
            .await
            .unwrap();
        assert_eq!(
            fixture.store.words.lock().unwrap()[&existing_uuid].pronunciation,
            "テスト"
        );

        import
            .handle(ImportUserDict {
                words: imported,
                override_existing: true,
            })
            .await
            .unwrap();
        assert_eq!(
            fixture.store.words.lock().unwrap()[&existing_uuid].pronunciation,
            "ケンショウ"
        );
    }

    /// 読み出し直後に待ちが入るストア。更新の直列化が無いと
    /// 並行書き込みで片方の単語が失われる
    struct SlowStore {
        inner: MemoryStore,
    }

    #[async_trait]
    impl UserDictStorePort for SlowStore {
        async fn load(&self) -> Result<HashMap<Uuid, UserDictWord>, StoreError> {
            let words = self.inner.load().await?;
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            Ok(words)
        }

        async fn save(&self, words: &HashMap<Uuid, UserDictWord>) -> Result<(), StoreError> {
            self.inner.save(words).await
        }

        async fn write_csv(
            &self,
            words: &HashMap<Uuid, UserDictWord>,
        ) -> Result<Option<PathBuf>, StoreError> {
            self.inner.write_csv(words).await
        }
    }

    #[tokio::test]
    async fn test_concurrent_apply_keeps_both_words() {
        let store = Arc::new(SlowStore {
            inner: MemoryStore {
                words: Mutex::new(HashMap::new()),
            },
        });
        let factory = Arc::new(CountingFactory {
            builds: AtomicUsize::new(0),
        });
        let snapshot = Arc::new(StubSnapshot {
            swaps: AtomicUsize::new(0),
        });
        let handler = ApplyWordHandler::new(
            store.clone(),
            factory,
            snapshot,
            DictUpdateLock::default(),
        );

        let (first, second) = tokio::join!(
            handler.handle(ApplyWord {
                property: property("test", "テスト", 1),
            }),
            handler.handle(ApplyWord {
                property: property("dict", "ジショ", 1),
            }),
        );
        first.unwrap();
        second.unwrap();

        assert_eq!(store.inner.words.lock().unwrap().len(), 2);
    }
}

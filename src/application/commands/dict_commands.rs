//! User Dict Commands - 辞書の書き込み操作

use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::dict::{UserDictWord, WordProperty};

/// 単語追加コマンド
#[derive(Debug, Clone)]
pub struct ApplyWord {
    pub property: WordProperty,
}

/// 単語更新コマンド
#[derive(Debug, Clone)]
pub struct RewriteWord {
    pub word_uuid: Uuid,
    pub property: WordProperty,
}

/// 単語削除コマンド
#[derive(Debug, Clone)]
pub struct DeleteWord {
    pub word_uuid: Uuid,
}

/// 辞書一括インポートコマンド
#[derive(Debug, Clone)]
pub struct ImportUserDict {
    pub words: HashMap<Uuid, UserDictWord>,
    /// 既存の同一 UUID を上書きするか
    pub override_existing: bool,
}

//! Preset Queries - プリセットの読み取り操作

/// プリセット一覧を取得する
#[derive(Debug, Clone)]
pub struct ListPresets;

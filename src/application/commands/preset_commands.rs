//! Preset Commands - プリセットの書き込み操作

use crate::application::ports::Preset;

/// プリセット追加コマンド
#[derive(Debug, Clone)]
pub struct AddPreset {
    pub preset: Preset,
}

/// プリセット更新コマンド
#[derive(Debug, Clone)]
pub struct UpdatePreset {
    pub preset: Preset,
}

/// プリセット削除コマンド
#[derive(Debug, Clone)]
pub struct DeletePreset {
    pub preset_id: i64,
}

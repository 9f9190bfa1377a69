//! Preset Store Port - プリセットの永続化抽象
//!
//! 名前付きパラメータ束（スタイル + 各スケール値）の一覧を
//! 構造化ファイルから読み書きする。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// プリセットストアのエラー
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("プリセットが見つかりません: {0}")]
    NotFound(i64),

    #[error("プリセット ID が重複しています: {0}")]
    DuplicateId(i64),

    #[error("プリセットファイルの入出力に失敗しました: {0}")]
    Io(#[from] std::io::Error),

    #[error("プリセットファイルの形式が不正です: {0}")]
    Format(String),
}

/// 名前付きの合成パラメータ束
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: i64,
    pub name: String,
    pub speaker_uuid: String,
    pub style_id: u32,
    #[serde(rename = "speedScale")]
    pub speed_scale: f32,
    #[serde(rename = "pitchScale")]
    pub pitch_scale: f32,
    #[serde(rename = "intonationScale")]
    pub intonation_scale: f32,
    #[serde(rename = "volumeScale")]
    pub volume_scale: f32,
    #[serde(rename = "prePhonemeLength")]
    pub pre_phoneme_length: f32,
    #[serde(rename = "postPhonemeLength")]
    pub post_phoneme_length: f32,
    #[serde(rename = "pauseLength", default, skip_serializing_if = "Option::is_none")]
    pub pause_length: Option<f32>,
    #[serde(rename = "pauseLengthScale", default = "default_pause_length_scale")]
    pub pause_length_scale: f32,
}

fn default_pause_length_scale() -> f32 {
    1.0
}

/// Preset Store Port
///
/// 実装はファイルの外部更新（mtime 変化）を検知して再読込する。
#[async_trait]
pub trait PresetStorePort: Send + Sync {
    /// 現在のプリセット一覧を取得する
    async fn load(&self) -> Result<Vec<Preset>, PresetError>;

    /// プリセット一覧を丸ごと保存する
    async fn save(&self, presets: &[Preset]) -> Result<(), PresetError>;
}

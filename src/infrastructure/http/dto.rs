//! Data Transfer Objects
//!
//! クエリパラメータの受け口。本家 ENGINE 互換の API は多くの
//! 入力をクエリ文字列で受けるため、ボディ DTO は少ない。

use serde::Deserialize;

/// GET 系クエリ構築のパラメータ（text + speaker）
#[derive(Debug, Deserialize)]
pub struct AudioQueryParams {
    pub text: String,
    /// スタイル ID（互換のためパラメータ名は speaker）
    pub speaker: u32,
}

/// プリセットからのクエリ構築のパラメータ
#[derive(Debug, Deserialize)]
pub struct AudioQueryFromPresetParams {
    pub text: String,
    pub preset_id: i64,
}

/// アクセント句構築のパラメータ
#[derive(Debug, Deserialize)]
pub struct AccentPhrasesParams {
    pub text: String,
    pub speaker: u32,
    /// true なら text を AquesTalk 風記法として解釈する
    #[serde(default)]
    pub is_kana: bool,
}

/// 韻律再計算のパラメータ
#[derive(Debug, Deserialize)]
pub struct MoraParams {
    pub speaker: u32,
}

/// 音声合成のパラメータ
#[derive(Debug, Deserialize)]
pub struct SynthesisParams {
    pub speaker: u32,
    #[serde(default = "default_upspeak")]
    pub enable_interrogative_upspeak: bool,
}

fn default_upspeak() -> bool {
    true
}

/// プリセット削除のパラメータ
#[derive(Debug, Deserialize)]
pub struct DeletePresetParams {
    pub id: i64,
}

/// 辞書インポートのパラメータ
#[derive(Debug, Deserialize)]
pub struct ImportDictParams {
    /// 既存単語と UUID が衝突したとき上書きするか
    #[serde(rename = "override", default)]
    pub override_existing: bool,
}

//! Synthesis Core Port - 音声合成核の抽象
//!
//! 韻律（音長・音高）の付与と波形合成を担う外部合成核の
//! インターフェース。具体実装は infrastructure/adapters/core 層にある。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::domain::prosody::{AccentPhrase, Mora};

/// 合成核のエラー
#[derive(Debug, Error)]
pub enum CoreError {
    /// 存在しないスタイル ID
    #[error("スタイルが見つかりません: {0}")]
    StyleNotFound(u32),

    /// 合成処理の失敗
    #[error("音声合成に失敗しました: {0}")]
    SynthesisFailed(String),

    /// クライアント切断などによる協調キャンセル
    #[error("合成がキャンセルされました")]
    Cancelled,
}

/// 話者スタイル
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleMeta {
    pub name: String,
    pub id: u32,
}

/// 話者メタ情報（GET /speakers がそのまま返す形）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerMeta {
    pub name: String,
    pub speaker_uuid: String,
    pub styles: Vec<StyleMeta>,
    pub version: String,
}

/// 波形出力の設定（AudioQuery の出力系フィールドから組む）
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub output_sampling_rate: u32,
    pub output_stereo: bool,
    pub volume_scale: f32,
}

/// Synthesis Core Port
#[async_trait]
pub trait SynthesisCorePort: Send + Sync {
    /// 提供する話者・スタイルの一覧
    fn metas(&self) -> Vec<SpeakerMeta>;

    /// 対応する合成核バージョンの一覧
    fn core_versions(&self) -> Vec<String>;

    /// アクセント句の音長（子音長・母音長）を導出して埋める
    ///
    /// 0 のままのフィールドだけを対象とし、設定済みの値には触れない
    /// 判断は呼び出し側（アプリケーション層）が行う。
    fn replace_phoneme_length(
        &self,
        phrases: Vec<AccentPhrase>,
        style_id: u32,
    ) -> Result<Vec<AccentPhrase>, CoreError>;

    /// アクセント句のモーラ音高を導出して埋める
    fn replace_mora_pitch(
        &self,
        phrases: Vec<AccentPhrase>,
        style_id: u32,
    ) -> Result<Vec<AccentPhrase>, CoreError>;

    /// モーラ列から波形（WAV バイト列）を合成する
    ///
    /// CPU バウンドで長時間になり得るため blocking タスクで実行され、
    /// `cancel` の発火で速やかに `CoreError::Cancelled` を返す。
    async fn synthesize(
        &self,
        moras: Vec<Mora>,
        style_id: u32,
        options: RenderOptions,
        cancel: CancellationToken,
    ) -> Result<Vec<u8>, CoreError>;
}

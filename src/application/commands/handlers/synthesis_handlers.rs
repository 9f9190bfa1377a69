//! Synthesis Command Handler

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::application::commands::Synthesize;
use crate::application::error::ApplicationError;
use crate::application::ports::{RenderOptions, SynthesisCorePort};
use crate::domain::query::{accept_legacy, query_to_moras};

/// Synthesize Handler
///
/// 後方互換レイヤで AudioQuery を受理し、大域パラメータを適用した
/// モーラ列を合成核へ渡す。キャンセルトークンは HTTP 層が
/// クライアント切断へ接続する。
pub struct SynthesizeHandler {
    core: Arc<dyn SynthesisCorePort>,
}

impl SynthesizeHandler {
    pub fn new(core: Arc<dyn SynthesisCorePort>) -> Self {
        Self { core }
    }

    pub async fn handle(
        &self,
        command: Synthesize,
        cancel: CancellationToken,
    ) -> Result<Vec<u8>, ApplicationError> {
        let query = accept_legacy(command.raw_query)?;
        let moras = query_to_moras(&query, command.enable_interrogative_upspeak);
        let options = RenderOptions {
            output_sampling_rate: query.output_sampling_rate,
            output_stereo: query.output_stereo,
            volume_scale: query.volume_scale,
        };

        let wav = self
            .core
            .synthesize(moras, command.style_id, options, cancel)
            .await?;

        tracing::info!(
            style_id = command.style_id,
            wav_bytes = wav.len(),
            "音声合成が完了"
        );
        Ok(wav)
    }
}

//! Mock Synthesis Core - 決定的な合成核アダプタ
//!
//! 実機の音響モデルを持たない環境向けの合成核。韻律は音素種別と
//! アクセント位置から決定的に導出し、波形は各モーラの F0 に
//! 対応する正弦波で描画する。出力はクエリ構築パイプラインの
//! 検証・結合試験に十分な整合性を持つ。

use std::io::Cursor;

use async_trait::async_trait;
use hound::{SampleFormat, WavSpec, WavWriter};
use tokio_util::sync::CancellationToken;

use crate::application::ports::{
    CoreError, RenderOptions, SpeakerMeta, StyleMeta, SynthesisCorePort,
};
use crate::domain::prosody::{AccentPhrase, Mora};

const CONSONANT_LENGTH: f32 = 0.04;
const VOWEL_LENGTH: f32 = 0.12;
const PAUSE_LENGTH: f32 = 0.30;
/// アクセント核までの高平部と核以降の低平部（対数 F0）
const HIGH_PITCH: f32 = 5.6;
const LOW_PITCH: f32 = 5.2;

/// 決定的な合成核
pub struct MockSynthesisCore {
    speakers: Vec<SpeakerMeta>,
}

impl MockSynthesisCore {
    pub fn new() -> Self {
        Self {
            speakers: vec![SpeakerMeta {
                name: "ひびき".to_string(),
                speaker_uuid: "35b2c544-660e-401e-b503-0e14c635303a".to_string(),
                styles: vec![
                    StyleMeta {
                        name: "ノーマル".to_string(),
                        id: 0,
                    },
                    StyleMeta {
                        name: "ささやき".to_string(),
                        id: 1,
                    },
                ],
                version: crate::VERSION.to_string(),
            }],
        }
    }

    fn ensure_style(&self, style_id: u32) -> Result<(), CoreError> {
        let known = self
            .speakers
            .iter()
            .flat_map(|s| s.styles.iter())
            .any(|style| style.id == style_id);
        if known {
            Ok(())
        } else {
            Err(CoreError::StyleNotFound(style_id))
        }
    }
}

impl Default for MockSynthesisCore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SynthesisCorePort for MockSynthesisCore {
    fn metas(&self) -> Vec<SpeakerMeta> {
        self.speakers.clone()
    }

    fn core_versions(&self) -> Vec<String> {
        vec![crate::VERSION.to_string()]
    }

    fn replace_phoneme_length(
        &self,
        mut phrases: Vec<AccentPhrase>,
        style_id: u32,
    ) -> Result<Vec<AccentPhrase>, CoreError> {
        self.ensure_style(style_id)?;
        for phrase in &mut phrases {
            for mora in &mut phrase.moras {
                if mora.consonant.is_some() {
                    mora.consonant_length = Some(CONSONANT_LENGTH);
                }
                mora.vowel_length = VOWEL_LENGTH;
            }
            if let Some(pause) = phrase.pause_mora.as_mut() {
                pause.vowel_length = PAUSE_LENGTH;
            }
        }
        Ok(phrases)
    }

    fn replace_mora_pitch(
        &self,
        mut phrases: Vec<AccentPhrase>,
        style_id: u32,
    ) -> Result<Vec<AccentPhrase>, CoreError> {
        self.ensure_style(style_id)?;
        for phrase in &mut phrases {
            let accent = phrase.accent;
            for (index, mora) in phrase.moras.iter_mut().enumerate() {
                mora.pitch = if mora.is_unvoiced() {
                    0.0
                } else if index < accent {
                    HIGH_PITCH
                } else {
                    LOW_PITCH
                };
            }
            if let Some(pause) = phrase.pause_mora.as_mut() {
                pause.pitch = 0.0;
            }
        }
        Ok(phrases)
    }

    async fn synthesize(
        &self,
        moras: Vec<Mora>,
        style_id: u32,
        options: RenderOptions,
        cancel: CancellationToken,
    ) -> Result<Vec<u8>, CoreError> {
        self.ensure_style(style_id)?;

        let render_cancel = cancel.clone();
        tokio::task::spawn_blocking(move || render_wav(&moras, &options, &render_cancel))
            .await
            .map_err(|e| CoreError::SynthesisFailed(format!("合成タスクが中断されました: {e}")))?
    }
}

/// モーラ列を正弦波 WAV として描画する
///
/// モーラごとにキャンセルを確認し、中断時は書きかけの波形を捨てる。
fn render_wav(
    moras: &[Mora],
    options: &RenderOptions,
    cancel: &CancellationToken,
) -> Result<Vec<u8>, CoreError> {
    let spec = WavSpec {
        channels: if options.output_stereo { 2 } else { 1 },
        sample_rate: options.output_sampling_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut buffer = Cursor::new(Vec::new());
    let mut writer = WavWriter::new(&mut buffer, spec)
        .map_err(|e| CoreError::SynthesisFailed(e.to_string()))?;

    let amplitude = (f32::from(i16::MAX) * 0.3 * options.volume_scale).clamp(
        f32::from(i16::MIN),
        f32::from(i16::MAX),
    );
    for mora in moras {
        if cancel.is_cancelled() {
            return Err(CoreError::Cancelled);
        }

        let duration = mora.consonant_length.unwrap_or(0.0) + mora.vowel_length;
        let samples = (duration * options.output_sampling_rate as f32).round() as usize;
        // pitch は対数 F0。無声・無音は 0 なので無音サンプルを書く
        let frequency = if mora.pitch > 0.0 { mora.pitch.exp() } else { 0.0 };

        for n in 0..samples {
            let value = if frequency > 0.0 {
                let t = n as f32 / options.output_sampling_rate as f32;
                (amplitude * (2.0 * std::f32::consts::PI * frequency * t).sin()) as i16
            } else {
                0
            };
            for _ in 0..spec.channels {
                writer
                    .write_sample(value)
                    .map_err(|e| CoreError::SynthesisFailed(e.to_string()))?;
            }
        }
    }

    writer
        .finalize()
        .map_err(|e| CoreError::SynthesisFailed(e.to_string()))?;
    Ok(buffer.into_inner())
}

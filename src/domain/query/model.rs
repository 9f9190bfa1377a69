//! Query Context - AudioQuery モデル
//!
//! 編集可能な音声合成リクエスト。フィールド名は API スキーマそのもの
//! であり、過去バージョンが返した JSON を今後も受理し続ける義務を負う
//! （互換規則は compat.rs を参照）。

use serde::{Deserialize, Serialize};

use crate::domain::kana::to_kana;
use crate::domain::prosody::{validate_accent_phrases, AccentPhrase};

use super::errors::CompatError;

/// 現行のクエリスキーマバージョン
pub const CURRENT_SCHEMA_VERSION: &str = "0.3.0";

/// エンジン既定の出力サンプリングレート
pub const DEFAULT_SAMPLING_RATE: u32 = 24000;

/// 音声合成用のクエリ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioQuery {
    /// アクセント句のリスト
    pub accent_phrases: Vec<AccentPhrase>,
    /// 全体の話速
    #[serde(rename = "speedScale")]
    pub speed_scale: f32,
    /// 全体の音高（加算）
    #[serde(rename = "pitchScale")]
    pub pitch_scale: f32,
    /// 全体の抑揚
    #[serde(rename = "intonationScale")]
    pub intonation_scale: f32,
    /// 全体の音量
    #[serde(rename = "volumeScale")]
    pub volume_scale: f32,
    /// 音声の前の無音時間（秒）
    #[serde(rename = "prePhonemeLength")]
    pub pre_phoneme_length: f32,
    /// 音声の後の無音時間（秒）
    #[serde(rename = "postPhonemeLength")]
    pub post_phoneme_length: f32,
    /// 句読点などの無音時間。None はモーラごとの既定値を使う
    #[serde(rename = "pauseLength", default)]
    pub pause_length: Option<f32>,
    /// 句読点などの無音時間（倍率）
    #[serde(rename = "pauseLengthScale")]
    pub pause_length_scale: f32,
    /// 音声データの出力サンプリングレート
    #[serde(rename = "outputSamplingRate")]
    pub output_sampling_rate: u32,
    /// 音声データをステレオ出力するか否か
    #[serde(rename = "outputStereo")]
    pub output_stereo: bool,
    /// [表示用] AquesTalk 風記法テキスト。構造編集時に再導出される
    #[serde(default)]
    pub kana: Option<String>,
    /// クエリを生成したスキーマバージョン
    #[serde(rename = "coreVersion", default)]
    pub core_version: Option<String>,
}

/// クエリ組み立て時のエンジン側既定値
#[derive(Debug, Clone)]
pub struct QueryDefaults {
    pub output_sampling_rate: u32,
    pub output_stereo: bool,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            output_sampling_rate: DEFAULT_SAMPLING_RATE,
            output_stereo: false,
        }
    }
}

/// アクセント句系列とエンジン既定値から AudioQuery を組み立てる
///
/// 倍率系は 1.0、加算系は 0.0 の中立値で初期化し、`kana` を記法
/// エンコーダで導出、スキーマバージョンを刻印する。
pub fn assemble(phrases: Vec<AccentPhrase>, defaults: &QueryDefaults) -> AudioQuery {
    let kana = to_kana(&phrases);
    AudioQuery {
        accent_phrases: phrases,
        speed_scale: 1.0,
        pitch_scale: 0.0,
        intonation_scale: 1.0,
        volume_scale: 1.0,
        pre_phoneme_length: 0.1,
        post_phoneme_length: 0.1,
        pause_length: None,
        pause_length_scale: 1.0,
        output_sampling_rate: defaults.output_sampling_rate,
        output_stereo: defaults.output_stereo,
        kana: Some(kana),
        core_version: Some(CURRENT_SCHEMA_VERSION.to_string()),
    }
}

impl AudioQuery {
    /// フィールド値の検証（構造は既に確定している前提）
    pub fn validate(&self) -> Result<(), CompatError> {
        validate_accent_phrases(&self.accent_phrases)?;
        for (name, value) in [
            ("speedScale", self.speed_scale),
            ("intonationScale", self.intonation_scale),
            ("volumeScale", self.volume_scale),
            ("pauseLengthScale", self.pause_length_scale),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CompatError::InvalidQuery(format!(
                    "{name} は 0 以上の有限値でなければなりません: {value}"
                )));
            }
        }
        if self.speed_scale == 0.0 {
            return Err(CompatError::InvalidQuery(
                "speedScale は 0 にできません".to_string(),
            ));
        }
        if !self.pitch_scale.is_finite() {
            return Err(CompatError::InvalidQuery(format!(
                "pitchScale は有限値でなければなりません: {}",
                self.pitch_scale
            )));
        }
        if self.output_sampling_rate == 0 {
            return Err(CompatError::InvalidQuery(
                "outputSamplingRate は 0 にできません".to_string(),
            ));
        }
        Ok(())
    }

    /// 構造編集後に表示用 kana を再導出する
    pub fn refresh_kana(&mut self) {
        self.kana = Some(to_kana(&self.accent_phrases));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prosody::Mora;

    fn sample_phrases() -> Vec<AccentPhrase> {
        vec![AccentPhrase::new(
            vec![Mora::from_phonemes(Some("k"), "a")],
            1,
            None,
            false,
        )
        .unwrap()]
    }

    #[test]
    fn test_assemble_neutral_defaults() {
        let query = assemble(sample_phrases(), &QueryDefaults::default());
        assert_eq!(query.speed_scale, 1.0);
        assert_eq!(query.pitch_scale, 0.0);
        assert_eq!(query.intonation_scale, 1.0);
        assert_eq!(query.volume_scale, 1.0);
        assert_eq!(query.pause_length, None);
        assert_eq!(query.pause_length_scale, 1.0);
        assert_eq!(query.kana.as_deref(), Some("カ'"));
        assert_eq!(query.core_version.as_deref(), Some(CURRENT_SCHEMA_VERSION));
    }

    #[test]
    fn test_serializes_with_camel_case_api_names() {
        let query = assemble(sample_phrases(), &QueryDefaults::default());
        let json = serde_json::to_value(&query).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "accent_phrases",
            "speedScale",
            "pitchScale",
            "intonationScale",
            "volumeScale",
            "prePhonemeLength",
            "postPhonemeLength",
            "pauseLength",
            "pauseLengthScale",
            "outputSamplingRate",
            "outputStereo",
            "kana",
            "coreVersion",
        ] {
            assert!(obj.contains_key(key), "missing key: {key}");
        }
    }

    #[test]
    fn test_validate_rejects_zero_speed() {
        let mut query = assemble(sample_phrases(), &QueryDefaults::default());
        query.speed_scale = 0.0;
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_accent() {
        let mut query = assemble(sample_phrases(), &QueryDefaults::default());
        query.accent_phrases[0].accent = 9;
        assert!(matches!(
            query.validate(),
            Err(CompatError::Validation(_))
        ));
    }
}

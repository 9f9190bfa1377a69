//! TTS Query Handlers
//!
//! テキスト / 記法からのアクセント句構築、AudioQuery の組み立て、
//! 音長・音高の再導出。いずれも現用の解析器スナップショットを
//! リクエスト冒頭で 1 回取得し、処理の間それを使い続ける。

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    AnalyzerSnapshotPort, PresetStorePort, SynthesisCorePort, TextAnalyzerPort,
};
use crate::application::queries::{
    BuildAccentPhrases, BuildAudioQuery, BuildAudioQueryFromPreset, RefreshMoraData,
    RefreshMoraLength, RefreshMoraPitch,
};
use crate::domain::kana::parse_kana;
use crate::domain::prosody::{
    build_accent_phrases, overlay_user, reconcile, validate_accent_phrases, AccentPhrase,
    FeatureLabel,
};
use crate::domain::query::{assemble, AudioQuery, QueryDefaults};

/// テキストを解析してアクセント句列を得る
///
/// 空白のみのテキストは解析器を通さず空列を返す。
fn derive_accent_phrases(
    analyzer: &Arc<dyn TextAnalyzerPort>,
    text: &str,
) -> Result<Vec<AccentPhrase>, ApplicationError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let features = analyzer.analyze(text)?;
    let labels = FeatureLabel::parse_all(&features)?;
    Ok(build_accent_phrases(&labels)?)
}

/// 合成核で音長・音高を導出する（全フィールドを新値で埋める）
fn fill_prosody(
    core: &Arc<dyn SynthesisCorePort>,
    phrases: Vec<AccentPhrase>,
    style_id: u32,
) -> Result<Vec<AccentPhrase>, ApplicationError> {
    let phrases = core.replace_phoneme_length(phrases, style_id)?;
    Ok(core.replace_mora_pitch(phrases, style_id)?)
}

/// 音長・音高フィールドをすべて未設定 (0) へ戻した骨格を作る
fn zeroed_skeleton(phrases: &[AccentPhrase]) -> Vec<AccentPhrase> {
    let mut skeleton = phrases.to_vec();
    for phrase in &mut skeleton {
        for mora in phrase
            .moras
            .iter_mut()
            .chain(phrase.pause_mora.iter_mut())
        {
            mora.vowel_length = 0.0;
            if mora.consonant_length.is_some() {
                mora.consonant_length = Some(0.0);
            }
            mora.pitch = 0.0;
        }
    }
    skeleton
}

/// 再導出の共通経路
///
/// 1. 骨格を 0 初期化し、要求されたフィールドだけ合成核で埋める
/// 2. 要求外のフィールド（0 のまま）へ提出値を引き継ぐ
/// 3. ユーザーが設定済みの非ゼロ値は再導出より常に優先する
fn refresh(
    core: &Arc<dyn SynthesisCorePort>,
    user: Vec<AccentPhrase>,
    style_id: u32,
    lengths: bool,
    pitches: bool,
) -> Result<Vec<AccentPhrase>, ApplicationError> {
    validate_accent_phrases(&user)?;
    let mut skeleton = zeroed_skeleton(&user);
    if lengths {
        skeleton = core.replace_phoneme_length(skeleton, style_id)?;
    }
    if pitches {
        skeleton = core.replace_mora_pitch(skeleton, style_id)?;
    }
    let carried = reconcile(skeleton, Some(&user));
    Ok(overlay_user(carried, &user))
}

// ============================================================================
// BuildAccentPhrases
// ============================================================================

/// BuildAccentPhrases Handler
pub struct AccentPhrasesHandler {
    snapshot: Arc<dyn AnalyzerSnapshotPort>,
    core: Arc<dyn SynthesisCorePort>,
}

impl AccentPhrasesHandler {
    pub fn new(snapshot: Arc<dyn AnalyzerSnapshotPort>, core: Arc<dyn SynthesisCorePort>) -> Self {
        Self { snapshot, core }
    }

    pub async fn handle(
        &self,
        query: BuildAccentPhrases,
    ) -> Result<Vec<AccentPhrase>, ApplicationError> {
        let phrases = if query.is_kana {
            parse_kana(&query.text)?
        } else {
            let analyzer = self.snapshot.current();
            derive_accent_phrases(&analyzer, &query.text)?
        };
        fill_prosody(&self.core, phrases, query.style_id)
    }
}

// ============================================================================
// BuildAudioQuery
// ============================================================================

/// BuildAudioQuery Handler
pub struct AudioQueryHandler {
    snapshot: Arc<dyn AnalyzerSnapshotPort>,
    core: Arc<dyn SynthesisCorePort>,
    defaults: QueryDefaults,
}

impl AudioQueryHandler {
    pub fn new(
        snapshot: Arc<dyn AnalyzerSnapshotPort>,
        core: Arc<dyn SynthesisCorePort>,
        defaults: QueryDefaults,
    ) -> Self {
        Self {
            snapshot,
            core,
            defaults,
        }
    }

    pub async fn handle(&self, query: BuildAudioQuery) -> Result<AudioQuery, ApplicationError> {
        let analyzer = self.snapshot.current();
        let phrases = derive_accent_phrases(&analyzer, &query.text)?;
        let phrases = fill_prosody(&self.core, phrases, query.style_id)?;
        Ok(assemble(phrases, &self.defaults))
    }
}

// ============================================================================
// BuildAudioQueryFromPreset
// ============================================================================

/// BuildAudioQueryFromPreset Handler
pub struct AudioQueryFromPresetHandler {
    snapshot: Arc<dyn AnalyzerSnapshotPort>,
    core: Arc<dyn SynthesisCorePort>,
    presets: Arc<dyn PresetStorePort>,
    defaults: QueryDefaults,
}

impl AudioQueryFromPresetHandler {
    pub fn new(
        snapshot: Arc<dyn AnalyzerSnapshotPort>,
        core: Arc<dyn SynthesisCorePort>,
        presets: Arc<dyn PresetStorePort>,
        defaults: QueryDefaults,
    ) -> Self {
        Self {
            snapshot,
            core,
            presets,
            defaults,
        }
    }

    pub async fn handle(
        &self,
        query: BuildAudioQueryFromPreset,
    ) -> Result<AudioQuery, ApplicationError> {
        let presets = self.presets.load().await?;
        let preset = presets
            .iter()
            .find(|p| p.id == query.preset_id)
            .ok_or_else(|| ApplicationError::not_found("プリセット", query.preset_id))?;

        let analyzer = self.snapshot.current();
        let phrases = derive_accent_phrases(&analyzer, &query.text)?;
        let phrases = fill_prosody(&self.core, phrases, preset.style_id)?;

        let mut audio_query = assemble(phrases, &self.defaults);
        audio_query.speed_scale = preset.speed_scale;
        audio_query.pitch_scale = preset.pitch_scale;
        audio_query.intonation_scale = preset.intonation_scale;
        audio_query.volume_scale = preset.volume_scale;
        audio_query.pre_phoneme_length = preset.pre_phoneme_length;
        audio_query.post_phoneme_length = preset.post_phoneme_length;
        audio_query.pause_length = preset.pause_length;
        audio_query.pause_length_scale = preset.pause_length_scale;
        Ok(audio_query)
    }
}

// ============================================================================
// RefreshMoraData / RefreshMoraLength / RefreshMoraPitch
// ============================================================================

/// RefreshMoraData Handler
pub struct MoraDataHandler {
    core: Arc<dyn SynthesisCorePort>,
}

impl MoraDataHandler {
    pub fn new(core: Arc<dyn SynthesisCorePort>) -> Self {
        Self { core }
    }

    pub async fn handle(
        &self,
        query: RefreshMoraData,
    ) -> Result<Vec<AccentPhrase>, ApplicationError> {
        refresh(&self.core, query.accent_phrases, query.style_id, true, true)
    }
}

/// RefreshMoraLength Handler
pub struct MoraLengthHandler {
    core: Arc<dyn SynthesisCorePort>,
}

impl MoraLengthHandler {
    pub fn new(core: Arc<dyn SynthesisCorePort>) -> Self {
        Self { core }
    }

    pub async fn handle(
        &self,
        query: RefreshMoraLength,
    ) -> Result<Vec<AccentPhrase>, ApplicationError> {
        refresh(
            &self.core,
            query.accent_phrases,
            query.style_id,
            true,
            false,
        )
    }
}

/// RefreshMoraPitch Handler
pub struct MoraPitchHandler {
    core: Arc<dyn SynthesisCorePort>,
}

impl MoraPitchHandler {
    pub fn new(core: Arc<dyn SynthesisCorePort>) -> Self {
        Self { core }
    }

    pub async fn handle(
        &self,
        query: RefreshMoraPitch,
    ) -> Result<Vec<AccentPhrase>, ApplicationError> {
        refresh(
            &self.core,
            query.accent_phrases,
            query.style_id,
            false,
            true,
        )
    }
}

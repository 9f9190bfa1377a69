//! TTS Queries - クエリ構築系の読み取り操作

use crate::domain::prosody::AccentPhrase;

/// テキストから AudioQuery を構築する
#[derive(Debug, Clone)]
pub struct BuildAudioQuery {
    pub text: String,
    pub style_id: u32,
}

/// プリセットを適用した AudioQuery を構築する
#[derive(Debug, Clone)]
pub struct BuildAudioQueryFromPreset {
    pub text: String,
    pub preset_id: i64,
}

/// テキストまたは記法からアクセント句列を構築する
#[derive(Debug, Clone)]
pub struct BuildAccentPhrases {
    pub text: String,
    pub style_id: u32,
    /// true のときは text を AquesTalk 風記法として解釈する
    pub is_kana: bool,
}

/// 音長と音高を再導出する
#[derive(Debug, Clone)]
pub struct RefreshMoraData {
    pub accent_phrases: Vec<AccentPhrase>,
    pub style_id: u32,
}

/// 音長のみ再導出する
#[derive(Debug, Clone)]
pub struct RefreshMoraLength {
    pub accent_phrases: Vec<AccentPhrase>,
    pub style_id: u32,
}

/// 音高のみ再導出する
#[derive(Debug, Clone)]
pub struct RefreshMoraPitch {
    pub accent_phrases: Vec<AccentPhrase>,
    pub style_id: u32,
}

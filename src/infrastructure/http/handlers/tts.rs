//! TTS HTTP Handlers
//!
//! クエリ構築・編集・合成のエンドポイント群

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::application::{
    BuildAccentPhrases, BuildAudioQuery, BuildAudioQueryFromPreset, RefreshMoraData,
    RefreshMoraLength, RefreshMoraPitch, Synthesize,
};
use crate::domain::prosody::AccentPhrase;
use crate::domain::query::AudioQuery;
use crate::infrastructure::http::dto::{
    AccentPhrasesParams, AudioQueryFromPresetParams, AudioQueryParams, MoraParams, SynthesisParams,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// テキストから AudioQuery を構築する
pub async fn audio_query(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AudioQueryParams>,
) -> Result<Json<AudioQuery>, ApiError> {
    let query = BuildAudioQuery {
        text: params.text,
        style_id: params.speaker,
    };
    let result = state.audio_query_handler.handle(query).await?;
    Ok(Json(result))
}

/// プリセットを適用した AudioQuery を構築する
pub async fn audio_query_from_preset(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AudioQueryFromPresetParams>,
) -> Result<Json<AudioQuery>, ApiError> {
    let query = BuildAudioQueryFromPreset {
        text: params.text,
        preset_id: params.preset_id,
    };
    let result = state.audio_query_from_preset_handler.handle(query).await?;
    Ok(Json(result))
}

/// テキスト（または AquesTalk 風記法）からアクセント句を構築する
pub async fn accent_phrases(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AccentPhrasesParams>,
) -> Result<Json<Vec<AccentPhrase>>, ApiError> {
    let query = BuildAccentPhrases {
        text: params.text,
        style_id: params.speaker,
        is_kana: params.is_kana,
    };
    let result = state.accent_phrases_handler.handle(query).await?;
    Ok(Json(result))
}

/// アクセント句の長さと音高を再計算する
pub async fn mora_data(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MoraParams>,
    Json(accent_phrases): Json<Vec<AccentPhrase>>,
) -> Result<Json<Vec<AccentPhrase>>, ApiError> {
    let query = RefreshMoraData {
        accent_phrases,
        style_id: params.speaker,
    };
    let result = state.mora_data_handler.handle(query).await?;
    Ok(Json(result))
}

/// アクセント句の長さのみ再計算する
pub async fn mora_length(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MoraParams>,
    Json(accent_phrases): Json<Vec<AccentPhrase>>,
) -> Result<Json<Vec<AccentPhrase>>, ApiError> {
    let query = RefreshMoraLength {
        accent_phrases,
        style_id: params.speaker,
    };
    let result = state.mora_length_handler.handle(query).await?;
    Ok(Json(result))
}

/// アクセント句の音高のみ再計算する
pub async fn mora_pitch(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MoraParams>,
    Json(accent_phrases): Json<Vec<AccentPhrase>>,
) -> Result<Json<Vec<AccentPhrase>>, ApiError> {
    let query = RefreshMoraPitch {
        accent_phrases,
        style_id: params.speaker,
    };
    let result = state.mora_pitch_handler.handle(query).await?;
    Ok(Json(result))
}

/// AudioQuery から WAV を合成する
///
/// ボディは後方互換レイヤで受理するため生 JSON のまま渡す。
/// cancellable_synthesis が有効なとき、クライアント切断でこの
/// Future ごと破棄されると DropGuard がトークンを倒し、
/// ブロッキング側の波形描画も止まる。
pub async fn synthesis(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SynthesisParams>,
    Json(raw_query): Json<serde_json::Value>,
) -> Result<Response, ApiError> {
    let cancel = CancellationToken::new();
    let _guard = state
        .config
        .synthesis
        .cancellable_synthesis
        .then(|| cancel.clone().drop_guard());

    let command = Synthesize {
        raw_query,
        style_id: params.speaker,
        enable_interrogative_upspeak: params.enable_interrogative_upspeak,
    };
    let wav = state.synthesize_handler.handle(command, cancel).await?;

    Ok(([(header::CONTENT_TYPE, "audio/wav")], wav).into_response())
}

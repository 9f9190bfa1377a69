//! Preset HTTP Handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::application::{AddPreset, DeletePreset, ListPresets, Preset, UpdatePreset};
use crate::infrastructure::http::dto::DeletePresetParams;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// プリセット一覧を取得する
pub async fn get_presets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Preset>>, ApiError> {
    let presets = state.list_presets_handler.handle(ListPresets).await?;
    Ok(Json(presets))
}

/// プリセットを追加する。追加したプリセットの ID を返す
pub async fn add_preset(
    State(state): State<Arc<AppState>>,
    Json(preset): Json<Preset>,
) -> Result<Json<i64>, ApiError> {
    let preset_id = state.add_preset_handler.handle(AddPreset { preset }).await?;
    Ok(Json(preset_id))
}

/// 既存のプリセットを更新する。更新したプリセットの ID を返す
pub async fn update_preset(
    State(state): State<Arc<AppState>>,
    Json(preset): Json<Preset>,
) -> Result<Json<i64>, ApiError> {
    let preset_id = state
        .update_preset_handler
        .handle(UpdatePreset { preset })
        .await?;
    Ok(Json(preset_id))
}

/// プリセットを削除する
pub async fn delete_preset(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DeletePresetParams>,
) -> Result<StatusCode, ApiError> {
    state
        .delete_preset_handler
        .handle(DeletePreset {
            preset_id: params.id,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

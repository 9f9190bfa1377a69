//! Engine Info HTTP Handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::application::SpeakerMeta;
use crate::infrastructure::http::state::AppState;

/// エンジンのバージョンを返す
pub async fn version() -> Json<&'static str> {
    Json(crate::VERSION)
}

/// 合成核のバージョン一覧を返す
pub async fn core_versions(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.core.core_versions())
}

/// 話者・スタイル一覧を返す
pub async fn speakers(State(state): State<Arc<AppState>>) -> Json<Vec<SpeakerMeta>> {
    Json(state.core.metas())
}

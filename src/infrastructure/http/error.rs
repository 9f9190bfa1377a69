//! HTTP Error Handling
//!
//! アプリケーション層エラーをステータスコード付きの JSON
//! （`{"detail": ...}`）へ写像する。利用者入力起因は 4xx、
//! エンジン内部起因は 5xx。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::{ApplicationError, CoreError, PresetError};
use crate::domain::query::CompatError;

/// エラー応答のボディ
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// API エラー
#[derive(Debug)]
pub enum ApiError {
    /// 入力が不正（記法・単語・アクセント句など）
    BadRequest(String),
    /// ボディが AudioQuery として解釈できない
    UnprocessableQuery(String),
    /// リソース未検出
    NotFound(String),
    /// クライアント切断による合成中断
    Cancelled,
    /// エンジン内部の失敗
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "不正なリクエスト");
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::UnprocessableQuery(msg) => {
                tracing::warn!(error = %msg, "AudioQuery として解釈不能");
                (StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "リソース未検出");
                (StatusCode::NOT_FOUND, msg)
            }
            ApiError::Cancelled => {
                // 切断済みクライアントへの応答。エラーとして騒がない
                tracing::debug!("クライアント切断により合成を中断");
                (
                    StatusCode::BAD_REQUEST,
                    "リクエストがキャンセルされました".to_string(),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "内部エラー");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorDetail { detail })).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            ApplicationError::InvalidKana(_)
            | ApplicationError::InvalidWord(_)
            | ApplicationError::Prosody(_) => ApiError::BadRequest(e.to_string()),
            ApplicationError::InvalidQuery(ref compat) => match compat {
                CompatError::NotAnAudioQuery { .. } => ApiError::UnprocessableQuery(e.to_string()),
                _ => ApiError::BadRequest(e.to_string()),
            },
            ApplicationError::Core(CoreError::StyleNotFound(_)) => ApiError::NotFound(e.to_string()),
            ApplicationError::Core(CoreError::Cancelled) => ApiError::Cancelled,
            ApplicationError::Preset(PresetError::NotFound(_)) => ApiError::NotFound(e.to_string()),
            ApplicationError::Preset(PresetError::DuplicateId(_)) => {
                ApiError::BadRequest(e.to_string())
            }
            ApplicationError::Analyzer(_)
            | ApplicationError::Core(_)
            | ApplicationError::Store(_)
            | ApplicationError::Preset(_) => ApiError::Internal(e.to_string()),
        }
    }
}

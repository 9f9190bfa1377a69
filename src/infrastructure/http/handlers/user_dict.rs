//! User Dict HTTP Handlers
//!
//! ユーザー辞書の参照・編集エンドポイント群。編集系は完了時に
//! 解析器の再構築まで済んでいるため、応答後すぐ新しい単語が
//! テキスト解析へ反映される。

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::application::{ApplyWord, DeleteWord, ImportUserDict, ListUserDictWords, RewriteWord};
use crate::domain::dict::{UserDictWord, WordProperty};
use crate::infrastructure::http::dto::ImportDictParams;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// ユーザー辞書の単語一覧を取得する
pub async fn get_user_dict(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HashMap<Uuid, UserDictWord>>, ApiError> {
    let words = state.list_user_dict_handler.handle(ListUserDictWords).await?;
    Ok(Json(words))
}

/// 単語を追加する。割り当てた UUID を返す
pub async fn add_user_dict_word(
    State(state): State<Arc<AppState>>,
    Query(property): Query<WordProperty>,
) -> Result<Json<Uuid>, ApiError> {
    let word_uuid = state
        .apply_word_handler
        .handle(ApplyWord { property })
        .await?;
    Ok(Json(word_uuid))
}

/// 既存の単語を更新する
pub async fn rewrite_user_dict_word(
    State(state): State<Arc<AppState>>,
    Path(word_uuid): Path<Uuid>,
    Query(property): Query<WordProperty>,
) -> Result<StatusCode, ApiError> {
    state
        .rewrite_word_handler
        .handle(RewriteWord {
            word_uuid,
            property,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 単語を削除する
pub async fn delete_user_dict_word(
    State(state): State<Arc<AppState>>,
    Path(word_uuid): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .delete_word_handler
        .handle(DeleteWord { word_uuid })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 単語表を一括インポートする
pub async fn import_user_dict(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ImportDictParams>,
    Json(words): Json<HashMap<Uuid, UserDictWord>>,
) -> Result<StatusCode, ApiError> {
    state
        .import_user_dict_handler
        .handle(ImportUserDict {
            words,
            override_existing: params.override_existing,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

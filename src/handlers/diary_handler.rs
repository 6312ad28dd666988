use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    data,
    models::{DiaryEntryDetail, DiaryEntrySummary},
    AppError, AppResult, AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct DiaryOwnerQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<Uuid>,
}

/// GET /api/diary?userId=
#[utoipa::path(
    get,
    path = "/api/diary",
    params(DiaryOwnerQuery),
    responses(
        (status = 200, description = "Diary entry summaries for the user, newest first", body = Vec<DiaryEntrySummary>),
        (status = 400, description = "Missing userId"),
        (status = 500, description = "Lookup failed")
    ),
    tag = "diary"
)]
pub async fn get_diary_entries(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DiaryOwnerQuery>,
) -> AppResult<Json<Vec<DiaryEntrySummary>>> {
    let user_id = query.user_id.ok_or_else(|| {
        AppError::BadRequest("userId query parameter is required".to_string())
    })?;

    match data::entries_for_user(&state.db, Some(user_id)).await {
        Some(entries) => Ok(Json(entries)),
        None => Err(AppError::Internal("Failed to load diary entries".to_string())),
    }
}

/// GET /api/diary/{id}?userId=
#[utoipa::path(
    get,
    path = "/api/diary/{id}",
    params(
        ("id" = Uuid, Path, description = "Diary entry ID"),
        DiaryOwnerQuery
    ),
    responses(
        (status = 200, description = "Full diary entry detail", body = DiaryEntryDetail),
        (status = 400, description = "Missing userId"),
        (status = 404, description = "Entry not found or owned by another user")
    ),
    tag = "diary"
)]
pub async fn get_diary_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<Uuid>,
    Query(query): Query<DiaryOwnerQuery>,
) -> AppResult<Json<DiaryEntryDetail>> {
    let user_id = query.user_id.ok_or_else(|| {
        AppError::BadRequest("userId query parameter is required".to_string())
    })?;

    match data::entry_by_id(&state.db, Some(entry_id), Some(user_id)).await {
        Some(detail) => Ok(Json(detail)),
        None => Err(AppError::NotFound(format!(
            "Diary entry {} not found",
            entry_id
        ))),
    }
}

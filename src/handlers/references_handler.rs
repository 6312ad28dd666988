use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    data,
    models::{CustomFieldDefinition, Emotion, Urge},
    AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct CatalogQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<Uuid>,
}

/// GET /api/emotions?userId=
#[utoipa::path(
    get,
    path = "/api/emotions",
    params(CatalogQuery),
    responses(
        (status = 200, description = "Emotion catalog (system plus the user's custom emotions)", body = Vec<Emotion>)
    ),
    tag = "references"
)]
pub async fn get_emotions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CatalogQuery>,
) -> Json<Vec<Emotion>> {
    Json(data::emotion_catalog(&state.db, query.user_id).await)
}

/// GET /api/urges?userId=
#[utoipa::path(
    get,
    path = "/api/urges",
    params(CatalogQuery),
    responses(
        (status = 200, description = "Urge catalog (system plus the user's custom urges)", body = Vec<Urge>)
    ),
    tag = "references"
)]
pub async fn get_urges(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CatalogQuery>,
) -> Json<Vec<Urge>> {
    Json(data::urge_catalog(&state.db, query.user_id).await)
}

/// GET /api/custom-fields?userId=
#[utoipa::path(
    get,
    path = "/api/custom-fields",
    params(CatalogQuery),
    responses(
        (status = 200, description = "Custom field definitions for the user's diary card", body = Vec<CustomFieldDefinition>)
    ),
    tag = "references"
)]
pub async fn get_custom_fields(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CatalogQuery>,
) -> Json<Vec<CustomFieldDefinition>> {
    Json(data::custom_field_catalog(&state.db, query.user_id).await)
}

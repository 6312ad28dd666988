use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{data, models::Skill, AppState};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SkillsQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<Uuid>,
}

/// GET /api/skills?userId=
///
/// The catalog never fails outright; a broken source degrades to the
/// rows the other source still provides.
#[utoipa::path(
    get,
    path = "/api/skills",
    params(SkillsQuery),
    responses(
        (status = 200, description = "Skill catalog (system curriculum plus the user's custom skills)", body = Vec<Skill>)
    ),
    tag = "skills"
)]
pub async fn get_skills(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SkillsQuery>,
) -> Json<Vec<Skill>> {
    Json(data::skill_catalog(&state.db, query.user_id).await)
}

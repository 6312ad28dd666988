use chrono::NaiveDate;
use utoipa::ToSchema;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimal emotion shape embedded in list rows.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmotionRef {
    pub id: Uuid,
    pub name: String,
    pub color: String,
}

/// Minimal skill shape embedded in list rows.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillRef {
    pub id: Uuid,
    pub name: String,
}

/// One row of a user's diary list view. Wellness rating and crisis flag
/// stay optional here; the list view renders blanks for unrated days.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntrySummary {
    pub id: Uuid,
    pub entry_date: NaiveDate,
    pub wellness_rating: Option<i32>,
    pub notes: Option<String>,
    pub crisis: Option<bool>,
    pub emotions: Vec<EmotionRef>,
    pub skills: Vec<SkillRef>,
}

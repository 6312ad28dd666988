use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::{CustomFieldDefinition, Emotion, EmotionRef, Skill, SkillRef, Urge};

#[derive(Debug, Clone, FromRow)]
pub struct SkillRow {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub practice: Option<String>,
    pub examples: Option<String>,
    pub benefits: Option<String>,
    pub icon: Option<String>,
    pub is_custom: bool,
}

#[derive(Debug, Clone, FromRow)]
pub struct EmotionRow {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub color: String,
    pub is_custom: bool,
}

#[derive(Debug, Clone, FromRow)]
pub struct UrgeRow {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub is_custom: bool,
}

#[derive(Debug, Clone, FromRow)]
pub struct CustomFieldRow {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: String,
    #[sqlx(rename = "type")]
    pub field_type: String,
    pub options: Option<serde_json::Value>,
    pub sort_order: i32,
    pub is_custom: bool,
}

impl From<SkillRow> for Skill {
    fn from(row: SkillRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            category: row.category,
            description: row.description,
            practice: row.practice,
            examples: row.examples,
            benefits: row.benefits,
            icon: row.icon,
            is_custom: row.is_custom,
            user_id: row.user_id,
        }
    }
}

impl From<EmotionRow> for Emotion {
    fn from(row: EmotionRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            color: row.color,
            is_custom: row.is_custom,
            user_id: row.user_id,
        }
    }
}

impl From<UrgeRow> for Urge {
    fn from(row: UrgeRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            is_custom: row.is_custom,
            user_id: row.user_id,
        }
    }
}

impl From<CustomFieldRow> for CustomFieldDefinition {
    fn from(row: CustomFieldRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            field_type: row.field_type,
            options: row.options,
            sort_order: row.sort_order,
            is_custom: row.is_custom,
            user_id: row.user_id,
        }
    }
}

/// Row shape of get_diary_entries_list_for_user. The emotion and skill
/// columns are JSONB arrays built by the SQL function and come back null
/// when an entry has no links.
#[derive(Debug, Clone, FromRow)]
pub struct EntryListRow {
    pub id: Uuid,
    pub date: NaiveDate,
    pub wellness_rating: Option<i32>,
    pub notes: Option<String>,
    pub crisis: Option<bool>,
    pub emotions: Option<Json<Vec<EmotionRef>>>,
    pub skills: Option<Json<Vec<SkillRef>>>,
}

/// Row shape of get_diary_entry_details. At most one row exists per
/// (entry, user) pair.
#[derive(Debug, Clone, FromRow)]
pub struct EntryDetailRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub wellness_rating: Option<i32>,
    pub notes: Option<String>,
    pub crisis: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub logged_emotions: Option<Json<Vec<RawLoggedEmotion>>>,
    pub logged_skills: Option<Json<Vec<RawLoggedSkill>>>,
    pub logged_urges: Option<Json<Vec<RawLoggedUrge>>>,
    pub logged_custom_fields: Option<Json<Vec<RawLoggedCustomField>>>,
}

// The detail function emits camelCase keys inside its JSONB arrays
// (emotionId, skillId, urgeId, fieldId).

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLoggedEmotion {
    pub emotion_id: Uuid,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub intensity: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLoggedSkill {
    pub skill_id: Uuid,
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLoggedUrge {
    pub urge_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub rating: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLoggedCustomField {
    pub field_id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

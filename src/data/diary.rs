use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::rows::{EntryDetailRow, EntryListRow};
use crate::models::{
    CustomFieldValue, DiaryEntryDetail, DiaryEntrySummary, LoggedCustomField, LoggedEmotion,
    LoggedSkill, LoggedUrge,
};

/// Diary list projection for one user. Ordering (newest first) comes from
/// the SQL function. Returns None when the user id is missing or the
/// query fails; an empty Vec means the user has no entries yet.
pub async fn entries_for_user(
    db: &PgPool,
    user_id: Option<Uuid>,
) -> Option<Vec<DiaryEntrySummary>> {
    let user_id = match user_id {
        Some(id) => id,
        None => {
            tracing::warn!("User id is required to fetch diary entries");
            return None;
        }
    };

    let rows = sqlx::query_as::<_, EntryListRow>(
        r#"SELECT id, date, wellness_rating, notes, crisis, emotions, skills
           FROM get_diary_entries_list_for_user($1)"#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await;

    rows_or_absent(rows, user_id)
        .map(|rows| rows.into_iter().map(project_summary).collect())
}

/// Fully assembled detail for one entry, scoped to its owner. The SQL
/// function returns no row when the entry does not exist or belongs to a
/// different user; both cases surface as None here.
pub async fn entry_by_id(
    db: &PgPool,
    entry_id: Option<Uuid>,
    user_id: Option<Uuid>,
) -> Option<DiaryEntryDetail> {
    let (entry_id, user_id) = match (entry_id, user_id) {
        (Some(entry_id), Some(user_id)) => (entry_id, user_id),
        _ => {
            tracing::warn!("Entry id and user id are both required to fetch entry details");
            return None;
        }
    };

    let row = sqlx::query_as::<_, EntryDetailRow>(
        r#"SELECT id, user_id, date, wellness_rating, notes, crisis, created_at, updated_at,
                  logged_emotions, logged_skills, logged_urges, logged_custom_fields
           FROM get_diary_entry_details($1, $2)"#,
    )
    .bind(entry_id)
    .bind(user_id)
    .fetch_optional(db)
    .await;

    match row {
        Ok(Some(row)) => Some(assemble_detail(row)),
        Ok(None) => {
            tracing::warn!(%entry_id, %user_id, "Diary entry not found");
            None
        }
        Err(e) => {
            tracing::error!(error = %e, %entry_id, %user_id, "Failed to fetch diary entry details");
            None
        }
    }
}

fn project_summary(row: EntryListRow) -> DiaryEntrySummary {
    DiaryEntrySummary {
        id: row.id,
        entry_date: row.date,
        wellness_rating: row.wellness_rating,
        notes: row.notes,
        crisis: row.crisis,
        emotions: unwrap_relation(row.emotions),
        skills: unwrap_relation(row.skills),
    }
}

fn assemble_detail(row: EntryDetailRow) -> DiaryEntryDetail {
    let entry_id = row.id;

    let wellness_rating = match row.wellness_rating {
        Some(rating) => rating,
        None => {
            tracing::warn!(%entry_id, "Wellness rating is null, defaulting to 0");
            0
        }
    };

    let crisis = match row.crisis {
        Some(flag) => flag,
        None => {
            tracing::warn!(%entry_id, "Crisis flag is null, defaulting to false");
            false
        }
    };

    let emotions = unwrap_relation(row.logged_emotions)
        .into_iter()
        .map(|e| LoggedEmotion {
            emotion_id: e.emotion_id,
            name: e.name,
            color: e.color,
            intensity: e.intensity.unwrap_or(0),
        })
        .collect();

    let skills = unwrap_relation(row.logged_skills)
        .into_iter()
        .map(|s| LoggedSkill {
            skill_id: s.skill_id,
            name: s.name,
            category: s.category,
        })
        .collect();

    let urges = unwrap_relation(row.logged_urges)
        .into_iter()
        .map(|u| LoggedUrge {
            urge_id: u.urge_id,
            name: u.name,
            rating: u.rating.unwrap_or(0),
        })
        .collect();

    let custom_fields = unwrap_relation(row.logged_custom_fields)
        .into_iter()
        .filter_map(|cf| {
            if cf.value.is_null() {
                // Unanswered fields are stored as null; nothing to show.
                return None;
            }
            match CustomFieldValue::from_parts(&cf.field_type, &cf.value) {
                Some(value) => Some(LoggedCustomField {
                    field_id: cf.field_id,
                    name: cf.name,
                    value,
                }),
                None => {
                    tracing::warn!(
                        %entry_id,
                        field_id = %cf.field_id,
                        field_type = %cf.field_type,
                        "Custom field value does not match its declared type; dropping"
                    );
                    None
                }
            }
        })
        .collect();

    DiaryEntryDetail {
        id: row.id,
        user_id: row.user_id,
        date: row.date,
        wellness_rating,
        notes: row.notes,
        crisis,
        emotions,
        skills,
        urges,
        custom_fields,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

/// Null and empty JSONB arrays both mean "nothing linked".
fn unwrap_relation<T>(value: Option<Json<Vec<T>>>) -> Vec<T> {
    value.map(|Json(items)| items).unwrap_or_default()
}

/// A failed fetch reads as None; zero rows stay a present, empty list.
fn rows_or_absent<T>(result: Result<Vec<T>, sqlx::Error>, user_id: Uuid) -> Option<Vec<T>> {
    match result {
        Ok(rows) => Some(rows),
        Err(e) => {
            tracing::error!(error = %e, %user_id, "Failed to fetch diary entries list");
            None
        }
    }
}

use sqlx::PgPool;
use std::collections::HashSet;
use uuid::Uuid;

use super::rows::{CustomFieldRow, EmotionRow, SkillRow, UrgeRow};
use crate::models::{CustomFieldDefinition, Emotion, Skill, Urge};

/// Which slice of a reference table to read: the shared system rows or
/// one user's custom rows.
#[derive(Debug, Clone, Copy)]
enum CatalogScope {
    System,
    Custom(Uuid),
}

/// Full skill catalog for a user: the built-in curriculum plus their own
/// custom skills, sorted by category then name. Without a user id only
/// the built-ins are returned.
pub async fn skill_catalog(db: &PgPool, user_id: Option<Uuid>) -> Vec<Skill> {
    let system = rows_or_empty(fetch_skills(db, CatalogScope::System).await, "system skills");
    let custom = match user_id {
        Some(user_id) => rows_or_empty(
            fetch_skills(db, CatalogScope::Custom(user_id)).await,
            "custom skills",
        ),
        None => Vec::new(),
    };

    resolve_skills(system, custom)
}

/// Emotion catalog for a user, sorted by name.
pub async fn emotion_catalog(db: &PgPool, user_id: Option<Uuid>) -> Vec<Emotion> {
    let system = rows_or_empty(
        fetch_emotions(db, CatalogScope::System).await,
        "system emotions",
    );
    let custom = match user_id {
        Some(user_id) => rows_or_empty(
            fetch_emotions(db, CatalogScope::Custom(user_id)).await,
            "custom emotions",
        ),
        None => Vec::new(),
    };

    resolve_emotions(system, custom)
}

/// Urge catalog for a user, sorted by name.
pub async fn urge_catalog(db: &PgPool, user_id: Option<Uuid>) -> Vec<Urge> {
    let system = rows_or_empty(fetch_urges(db, CatalogScope::System).await, "system urges");
    let custom = match user_id {
        Some(user_id) => rows_or_empty(
            fetch_urges(db, CatalogScope::Custom(user_id)).await,
            "custom urges",
        ),
        None => Vec::new(),
    };

    resolve_urges(system, custom)
}

/// Custom field definitions for a user, sorted by sort order then name.
pub async fn custom_field_catalog(db: &PgPool, user_id: Option<Uuid>) -> Vec<CustomFieldDefinition> {
    let system = rows_or_empty(
        fetch_custom_fields(db, CatalogScope::System).await,
        "system custom fields",
    );
    let custom = match user_id {
        Some(user_id) => rows_or_empty(
            fetch_custom_fields(db, CatalogScope::Custom(user_id)).await,
            "user custom fields",
        ),
        None => Vec::new(),
    };

    resolve_custom_fields(system, custom)
}

async fn fetch_skills(db: &PgPool, scope: CatalogScope) -> Result<Vec<SkillRow>, sqlx::Error> {
    match scope {
        CatalogScope::System => {
            sqlx::query_as::<_, SkillRow>(
                r#"SELECT id, user_id, name, category, description, practice, examples, benefits, icon, is_custom
                   FROM dbt_skills
                   WHERE is_custom = false AND user_id IS NULL
                   ORDER BY category, name"#,
            )
            .fetch_all(db)
            .await
        }
        CatalogScope::Custom(user_id) => {
            sqlx::query_as::<_, SkillRow>(
                r#"SELECT id, user_id, name, category, description, practice, examples, benefits, icon, is_custom
                   FROM dbt_skills
                   WHERE user_id = $1 AND is_custom = true
                   ORDER BY category, name"#,
            )
            .bind(user_id)
            .fetch_all(db)
            .await
        }
    }
}

async fn fetch_emotions(db: &PgPool, scope: CatalogScope) -> Result<Vec<EmotionRow>, sqlx::Error> {
    match scope {
        CatalogScope::System => {
            sqlx::query_as::<_, EmotionRow>(
                r#"SELECT id, user_id, name, color, is_custom
                   FROM dbt_emotions
                   WHERE is_custom = false AND user_id IS NULL
                   ORDER BY name"#,
            )
            .fetch_all(db)
            .await
        }
        CatalogScope::Custom(user_id) => {
            sqlx::query_as::<_, EmotionRow>(
                r#"SELECT id, user_id, name, color, is_custom
                   FROM dbt_emotions
                   WHERE user_id = $1 AND is_custom = true
                   ORDER BY name"#,
            )
            .bind(user_id)
            .fetch_all(db)
            .await
        }
    }
}

async fn fetch_urges(db: &PgPool, scope: CatalogScope) -> Result<Vec<UrgeRow>, sqlx::Error> {
    match scope {
        CatalogScope::System => {
            sqlx::query_as::<_, UrgeRow>(
                r#"SELECT id, user_id, name, is_custom
                   FROM dbt_urges
                   WHERE is_custom = false AND user_id IS NULL
                   ORDER BY name"#,
            )
            .fetch_all(db)
            .await
        }
        CatalogScope::Custom(user_id) => {
            sqlx::query_as::<_, UrgeRow>(
                r#"SELECT id, user_id, name, is_custom
                   FROM dbt_urges
                   WHERE user_id = $1 AND is_custom = true
                   ORDER BY name"#,
            )
            .bind(user_id)
            .fetch_all(db)
            .await
        }
    }
}

async fn fetch_custom_fields(
    db: &PgPool,
    scope: CatalogScope,
) -> Result<Vec<CustomFieldRow>, sqlx::Error> {
    match scope {
        CatalogScope::System => {
            sqlx::query_as::<_, CustomFieldRow>(
                r#"SELECT id, user_id, name, type, options, sort_order, is_custom
                   FROM dbt_custom_fields
                   WHERE is_custom = false AND user_id IS NULL
                   ORDER BY sort_order, name"#,
            )
            .fetch_all(db)
            .await
        }
        CatalogScope::Custom(user_id) => {
            sqlx::query_as::<_, CustomFieldRow>(
                r#"SELECT id, user_id, name, type, options, sort_order, is_custom
                   FROM dbt_custom_fields
                   WHERE user_id = $1 AND is_custom = true
                   ORDER BY sort_order, name"#,
            )
            .bind(user_id)
            .fetch_all(db)
            .await
        }
    }
}

/// A failed source degrades to an empty list so the other source still
/// reaches the caller.
fn rows_or_empty<T>(result: Result<Vec<T>, sqlx::Error>, source: &str) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!(error = %e, source, "Catalog fetch failed; treating source as empty");
            Vec::new()
        }
    }
}

/// Concatenates system rows before custom rows, keeping the first
/// occurrence of each id. System rows win on collision.
fn merge_catalogs<T>(system: Vec<T>, custom: Vec<T>, id_of: impl Fn(&T) -> Uuid) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut merged = Vec::with_capacity(system.len() + custom.len());

    for item in system.into_iter().chain(custom) {
        if seen.insert(id_of(&item)) {
            merged.push(item);
        }
    }

    merged
}

fn resolve_skills(system: Vec<SkillRow>, custom: Vec<SkillRow>) -> Vec<Skill> {
    let mut merged = merge_catalogs(system, custom, |row| row.id);
    merged.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));
    merged.into_iter().map(Skill::from).collect()
}

fn resolve_emotions(system: Vec<EmotionRow>, custom: Vec<EmotionRow>) -> Vec<Emotion> {
    let mut merged = merge_catalogs(system, custom, |row| row.id);
    merged.sort_by(|a, b| a.name.cmp(&b.name));
    merged.into_iter().map(Emotion::from).collect()
}

fn resolve_urges(system: Vec<UrgeRow>, custom: Vec<UrgeRow>) -> Vec<Urge> {
    let mut merged = merge_catalogs(system, custom, |row| row.id);
    merged.sort_by(|a, b| a.name.cmp(&b.name));
    merged.into_iter().map(Urge::from).collect()
}

fn resolve_custom_fields(
    system: Vec<CustomFieldRow>,
    custom: Vec<CustomFieldRow>,
) -> Vec<CustomFieldDefinition> {
    let mut merged = merge_catalogs(system, custom, |row| row.id);
    merged.sort_by(|a, b| {
        a.sort_order
            .cmp(&b.sort_order)
            .then_with(|| a.name.cmp(&b.name))
    });
    merged.into_iter().map(CustomFieldDefinition::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill_row(id: u128, category: &str, name: &str) -> SkillRow {
        SkillRow {
            id: Uuid::from_u128(id),
            user_id: None,
            name: name.to_string(),
            category: category.to_string(),
            description: None,
            practice: None,
            examples: None,
            benefits: None,
            icon: None,
            is_custom: false,
        }
    }

    fn custom_skill_row(id: u128, user: u128, category: &str, name: &str) -> SkillRow {
        SkillRow {
            user_id: Some(Uuid::from_u128(user)),
            is_custom: true,
            ..skill_row(id, category, name)
        }
    }

    fn emotion_row(id: u128, name: &str) -> EmotionRow {
        EmotionRow {
            id: Uuid::from_u128(id),
            user_id: None,
            name: name.to_string(),
            color: "#64748b".to_string(),
            is_custom: false,
        }
    }

    fn field_row(id: u128, name: &str, sort_order: i32) -> CustomFieldRow {
        CustomFieldRow {
            id: Uuid::from_u128(id),
            user_id: None,
            name: name.to_string(),
            field_type: "Text".to_string(),
            options: None,
            sort_order,
            is_custom: false,
        }
    }

    #[test]
    fn custom_skills_interleave_with_system_by_category() {
        let system = vec![
            skill_row(1, "Mindfulness", "Describe"),
            skill_row(2, "Mindfulness", "Observe"),
        ];
        let custom = vec![custom_skill_row(3, 9, "Distress Tolerance", "TIPP")];

        let skills = resolve_skills(system, custom);

        let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["TIPP", "Describe", "Observe"]);
        assert!(skills[0].is_custom);
    }

    #[test]
    fn system_row_wins_on_id_collision() {
        let shared = Uuid::from_u128(7);
        let system = vec![skill_row(7, "Mindfulness", "Observe")];
        let custom = vec![custom_skill_row(7, 9, "Shadowing", "Observe (mine)")];

        let skills = resolve_skills(system, custom);

        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].id, shared);
        assert_eq!(skills[0].name, "Observe");
        assert!(!skills[0].is_custom);
    }

    #[test]
    fn distinct_ids_survive_the_merge() {
        let merged = merge_catalogs(
            vec![skill_row(1, "Mindfulness", "Observe")],
            vec![custom_skill_row(2, 9, "Mindfulness", "Observe")],
            |row| row.id,
        );

        // Same name is fine; only ids deduplicate.
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn emotions_sort_by_name() {
        let system = vec![emotion_row(1, "Shame"), emotion_row(2, "Anger")];
        let custom = vec![EmotionRow {
            user_id: Some(Uuid::from_u128(9)),
            is_custom: true,
            ..emotion_row(3, "Dread")
        }];

        let emotions = resolve_emotions(system, custom);

        let names: Vec<&str> = emotions.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Anger", "Dread", "Shame"]);
    }

    #[test]
    fn custom_fields_sort_by_sort_order_then_name() {
        let system = vec![
            field_row(1, "Sleep quality", 2),
            field_row(2, "Appetite", 2),
            field_row(3, "Medication", 1),
        ];

        let fields = resolve_custom_fields(system, Vec::new());

        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Medication", "Appetite", "Sleep quality"]);
    }

    #[test]
    fn failed_source_degrades_to_empty() {
        let rows = rows_or_empty::<SkillRow>(Err(sqlx::Error::RowNotFound), "system skills");
        assert!(rows.is_empty());

        let rows = rows_or_empty(Ok(vec![skill_row(1, "Mindfulness", "Observe")]), "system skills");
        assert_eq!(rows.len(), 1);
    }
}

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Diarycard API",
        version = "1.0.0",
        description = "Read API for DBT diary cards: skill and reference catalogs plus diary entry views"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        // Health
        crate::handlers::health::health_check,

        // Skills
        crate::handlers::skills_handler::get_skills,

        // References
        crate::handlers::references_handler::get_emotions,
        crate::handlers::references_handler::get_urges,
        crate::handlers::references_handler::get_custom_fields,

        // Diary
        crate::handlers::diary_handler::get_diary_entries,
        crate::handlers::diary_handler::get_diary_entry,
    ),
    components(
        schemas(
            // Catalog models
            crate::models::Skill,
            crate::models::Emotion,
            crate::models::Urge,
            crate::models::CustomFieldDefinition,

            // Diary views
            crate::models::DiaryEntrySummary,
            crate::models::EmotionRef,
            crate::models::SkillRef,
            crate::models::DiaryEntryDetail,
            crate::models::LoggedEmotion,
            crate::models::LoggedSkill,
            crate::models::LoggedUrge,
            crate::models::LoggedCustomField,
            crate::models::CustomFieldValue,
        )
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "skills", description = "DBT skill catalog"),
        (name = "references", description = "Emotion, urge and custom field catalogs"),
        (name = "diary", description = "Diary entry views"),
    )
)]
pub struct ApiDoc;

use utoipa::ToSchema;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A DBT skill as shown in the catalog, either part of the built-in
/// curriculum or created by a single user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub practice: Option<String>,
    pub examples: Option<String>,
    pub benefits: Option<String>,
    pub icon: Option<String>,
    pub is_custom: bool,
    pub user_id: Option<Uuid>, // None for system skills
}

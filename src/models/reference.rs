use utoipa::ToSchema;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Emotion {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub is_custom: bool,
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Urge {
    pub id: Uuid,
    pub name: String,
    pub is_custom: bool,
    pub user_id: Option<Uuid>,
}

/// Definition of a user-configurable diary field. `options` only carries
/// data for Select fields (the list of allowed choices).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldDefinition {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub options: Option<serde_json::Value>,
    pub sort_order: i32,
    pub is_custom: bool,
    pub user_id: Option<Uuid>,
}

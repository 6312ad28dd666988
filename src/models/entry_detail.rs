use chrono::{DateTime, NaiveDate, Utc};
use utoipa::ToSchema;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fully assembled diary entry for the detail screen. Unlike the list
/// summary, the rating and crisis flag are concrete here; nulls coming
/// out of storage are defaulted during assembly.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntryDetail {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub wellness_rating: i32,
    pub notes: Option<String>,
    pub crisis: bool,
    pub emotions: Vec<LoggedEmotion>,
    pub skills: Vec<LoggedSkill>,
    pub urges: Vec<LoggedUrge>,
    pub custom_fields: Vec<LoggedCustomField>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoggedEmotion {
    pub emotion_id: Uuid,
    pub name: String,
    pub color: String,
    pub intensity: i32, // 0-5
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoggedSkill {
    pub skill_id: Uuid,
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoggedUrge {
    pub urge_id: Uuid,
    pub name: String,
    pub rating: i32, // 0-5
}

/// A custom field answer attached to an entry. The value serializes
/// inline as `"type": ..., "value": ...` next to the field metadata.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoggedCustomField {
    pub field_id: Uuid,
    pub name: String,
    #[serde(flatten)]
    pub value: CustomFieldValue,
}

/// Typed custom field payload. The variant must agree with the field's
/// declared type; values that do not are dropped during assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", content = "value")]
pub enum CustomFieldValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Select(String),
}

impl CustomFieldValue {
    /// Pairs a declared field type with its raw JSON value. Returns None
    /// when the payload does not match the declaration or the type name
    /// is unknown.
    pub fn from_parts(field_type: &str, value: &serde_json::Value) -> Option<Self> {
        match field_type {
            "Text" => value.as_str().map(|s| Self::Text(s.to_string())),
            "Number" => value.as_f64().map(Self::Number),
            "Boolean" => value.as_bool().map(Self::Boolean),
            "Select" => value.as_str().map(|s| Self::Select(s.to_string())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn custom_field_serializes_with_inline_type_and_value() {
        let field = LoggedCustomField {
            field_id: Uuid::nil(),
            name: "Hours slept".to_string(),
            value: CustomFieldValue::Number(7.5),
        };

        let serialized = serde_json::to_value(&field).unwrap();
        assert_eq!(
            serialized,
            json!({
                "fieldId": "00000000-0000-0000-0000-000000000000",
                "name": "Hours slept",
                "type": "Number",
                "value": 7.5
            })
        );
    }

    #[test]
    fn from_parts_accepts_matching_payloads() {
        assert_eq!(
            CustomFieldValue::from_parts("Text", &json!("slept well")),
            Some(CustomFieldValue::Text("slept well".to_string()))
        );
        assert_eq!(
            CustomFieldValue::from_parts("Number", &json!(3)),
            Some(CustomFieldValue::Number(3.0))
        );
        assert_eq!(
            CustomFieldValue::from_parts("Boolean", &json!(true)),
            Some(CustomFieldValue::Boolean(true))
        );
        assert_eq!(
            CustomFieldValue::from_parts("Select", &json!("Morning")),
            Some(CustomFieldValue::Select("Morning".to_string()))
        );
    }

    #[test]
    fn from_parts_rejects_mismatched_payloads() {
        assert_eq!(CustomFieldValue::from_parts("Number", &json!("seven")), None);
        assert_eq!(CustomFieldValue::from_parts("Boolean", &json!(1)), None);
        assert_eq!(CustomFieldValue::from_parts("Text", &json!(false)), None);
    }

    #[test]
    fn from_parts_rejects_unknown_type_names() {
        assert_eq!(CustomFieldValue::from_parts("Slider", &json!(4)), None);
    }
}

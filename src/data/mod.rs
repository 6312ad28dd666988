pub mod catalog;
pub mod diary;
mod rows;

pub use catalog::{custom_field_catalog, emotion_catalog, skill_catalog, urge_catalog};
pub use diary::{entries_for_user, entry_by_id};

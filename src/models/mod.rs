pub mod entry;
pub mod entry_detail;
pub mod reference;
pub mod skill;

pub use entry::{DiaryEntrySummary, EmotionRef, SkillRef};
pub use entry_detail::{
    CustomFieldValue, DiaryEntryDetail, LoggedCustomField, LoggedEmotion, LoggedSkill, LoggedUrge,
};
pub use reference::{CustomFieldDefinition, Emotion, Urge};
pub use skill::Skill;

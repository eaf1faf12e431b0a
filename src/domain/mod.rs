//! Domain layer - Business logic and domain models

pub mod analytics;
pub mod breathing;
pub mod catalog;
pub mod chatbot;
pub mod daily;
pub mod entry;
pub mod mood;
pub mod mood_log;
pub mod recommend;
pub mod validation;

pub use catalog::{load_catalog, Catalog, CatalogItem, Category};
pub use entry::{EntryDraft, JournalEntry};
pub use mood::MoodLevel;
pub use mood_log::MoodLog;

//! Journal entries

use crate::domain::mood::MoodLevel;
use crate::domain::validation::{normalize_tags, validate_content};
use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved journal entry. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub mood: MoodLevel,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Unvalidated user input for a new entry
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub content: String,
    pub mood: MoodLevel,
    pub prompt: Option<String>,
    pub tags: Vec<String>,
}

impl EntryDraft {
    pub fn new(content: impl Into<String>, mood: MoodLevel) -> Self {
        EntryDraft {
            content: content.into(),
            mood,
            prompt: None,
            tags: Vec::new(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

impl JournalEntry {
    /// Validate a draft and stamp it with a fresh id and `now`.
    pub fn new(draft: EntryDraft, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        let content = validate_content(&draft.content)?;
        let tags = normalize_tags(&draft.tags)?;
        let prompt = draft
            .prompt
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        Ok(JournalEntry {
            id: Uuid::new_v4().to_string(),
            timestamp: now,
            mood: draft.mood,
            content,
            prompt,
            tags,
        })
    }

    /// Build an entry from already-trusted parts (fixtures, imports).
    pub fn from_parts(
        id: impl Into<String>,
        timestamp: DateTime<Utc>,
        mood: MoodLevel,
        content: impl Into<String>,
    ) -> Self {
        JournalEntry {
            id: id.into(),
            timestamp,
            mood,
            content: content.into(),
            prompt: None,
            tags: Vec::new(),
        }
    }
}

/// Sort newest first
pub fn sort_newest_first(entries: &mut [JournalEntry]) {
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

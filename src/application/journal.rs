//! Write entries, log moods and page through the timeline

use crate::application::save_guard::SaveGuard;
use crate::domain::entry::{EntryDraft, JournalEntry};
use crate::domain::mood::MoodLevel;
use crate::domain::mood_log::{latest_on, MoodLog};
use crate::error::Result;
use crate::infrastructure::JournalRepository;
use chrono::{DateTime, NaiveDate, Utc};

/// Entries shown per timeline page
pub const PAGE_SIZE: usize = 6;

/// One page of the timeline, newest entries first
#[derive(Debug, Clone, PartialEq)]
pub struct TimelinePage {
    pub entries: Vec<JournalEntry>,
    /// 1-based
    pub page: usize,
    pub total_pages: usize,
    pub total_entries: usize,
}

/// Service for one owner's journal
pub struct JournalService<R> {
    repository: R,
    owner: String,
    guard: SaveGuard,
}

impl<R: JournalRepository> JournalService<R> {
    pub fn new(repository: R, owner: impl Into<String>) -> Self {
        JournalService {
            repository,
            owner: owner.into(),
            guard: SaveGuard::new(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Validate and store a new entry.
    ///
    /// Validation happens before the store is touched; a rejected draft
    /// leaves nothing behind.
    pub fn write_entry(&self, draft: EntryDraft, now: DateTime<Utc>) -> Result<JournalEntry> {
        let _permit = self.guard.begin("journal entry")?;

        let entry = JournalEntry::new(draft, now)?;
        self.repository
            .append_entry(&self.owner, &entry)
            .inspect_err(|e| {
                tracing::warn!(owner = %self.owner, error = %e, "failed to save journal entry")
            })?;

        tracing::info!(owner = %self.owner, id = %entry.id, mood = %entry.mood, "saved journal entry");
        Ok(entry)
    }

    /// Record a mood check-in; the store enforces the daily limit.
    pub fn log_mood(
        &self,
        mood: MoodLevel,
        note: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<MoodLog> {
        let _permit = self.guard.begin("mood check-in")?;

        let log = MoodLog::new(mood, note, now)?;
        self.repository
            .append_mood_log(&self.owner, &log)
            .inspect_err(|e| {
                tracing::warn!(owner = %self.owner, error = %e, "failed to save mood check-in")
            })?;

        tracing::info!(owner = %self.owner, id = %log.id, mood = %log.mood, "saved mood check-in");
        Ok(log)
    }

    /// All entries, newest first
    pub fn entries(&self) -> Result<Vec<JournalEntry>> {
        self.repository.list_entries(&self.owner)
    }

    /// Page `page` (1-based; 0 reads as 1) of the timeline.
    /// Pages past the end come back empty.
    pub fn timeline(&self, page: usize) -> Result<TimelinePage> {
        let entries = self.entries()?;
        Ok(paginate(entries, page))
    }

    /// Latest mood check-in recorded on `today` (UTC date)
    pub fn todays_mood(&self, today: NaiveDate) -> Result<Option<MoodLog>> {
        let logs = self.repository.list_mood_logs(&self.owner)?;
        Ok(latest_on(&logs, today).cloned())
    }
}

fn paginate(entries: Vec<JournalEntry>, page: usize) -> TimelinePage {
    let page = page.max(1);
    let total_entries = entries.len();
    let total_pages = total_entries.div_ceil(PAGE_SIZE);

    let entries = entries
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();

    TimelinePage {
        entries,
        page,
        total_pages,
        total_entries,
    }
}

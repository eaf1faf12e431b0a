//! In-memory repository for tests and embedders

use crate::domain::entry::{sort_newest_first, JournalEntry};
use crate::domain::mood_log::{check_daily_limit, MoodLog};
use crate::error::{Result, SolaceError};
use crate::infrastructure::repository::JournalRepository;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct OwnerData {
    entries: Vec<JournalEntry>,
    moods: Vec<MoodLog>,
}

#[derive(Debug, Default)]
pub struct InMemoryRepository {
    owners: Mutex<HashMap<String, OwnerData>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, OwnerData>>> {
        self.owners
            .lock()
            .map_err(|_| SolaceError::Storage("in-memory store lock poisoned".to_string()))
    }
}

impl JournalRepository for InMemoryRepository {
    fn list_entries(&self, owner: &str) -> Result<Vec<JournalEntry>> {
        let owners = self.lock()?;
        let mut entries = owners
            .get(owner)
            .map(|data| data.entries.clone())
            .unwrap_or_default();
        sort_newest_first(&mut entries);
        Ok(entries)
    }

    fn append_entry(&self, owner: &str, entry: &JournalEntry) -> Result<()> {
        let mut owners = self.lock()?;
        let data = owners.entry(owner.to_string()).or_default();

        if data.entries.iter().any(|e| e.id == entry.id) {
            return Err(SolaceError::Storage(format!(
                "Entry {} already exists",
                entry.id
            )));
        }
        data.entries.push(entry.clone());
        Ok(())
    }

    fn list_mood_logs(&self, owner: &str) -> Result<Vec<MoodLog>> {
        let owners = self.lock()?;
        let mut logs = owners
            .get(owner)
            .map(|data| data.moods.clone())
            .unwrap_or_default();
        logs.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Ok(logs)
    }

    fn append_mood_log(&self, owner: &str, log: &MoodLog) -> Result<()> {
        let mut owners = self.lock()?;
        let data = owners.entry(owner.to_string()).or_default();

        check_daily_limit(&data.moods, log)?;
        data.moods.push(log.clone());
        Ok(())
    }
}

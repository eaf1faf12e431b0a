//! Mood statistics use case

use crate::domain::analytics::{summary, MoodSummary};
use crate::error::Result;
use crate::infrastructure::JournalRepository;
use chrono::{DateTime, TimeZone, Utc};

pub struct StatsService<R> {
    repository: R,
    owner: String,
}

impl<R: JournalRepository> StatsService<R> {
    pub fn new(repository: R, owner: impl Into<String>) -> Self {
        StatsService {
            repository,
            owner: owner.into(),
        }
    }

    /// Summarize the owner's full history as of `now`; streak days follow `tz`.
    pub fn summary<Tz: TimeZone>(&self, now: DateTime<Utc>, tz: &Tz) -> Result<MoodSummary> {
        let entries = self.repository.list_entries(&self.owner)?;
        Ok(summary(&entries, now, tz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::JournalEntry;
    use crate::domain::mood::MoodLevel;
    use crate::infrastructure::InMemoryRepository;
    use chrono::Duration;

    #[test]
    fn test_summary_for_owner() {
        let repo = InMemoryRepository::new();
        let now = Utc.with_ymd_and_hms(2025, 7, 4, 18, 0, 0).unwrap();
        for (i, mood) in [MoodLevel::Good, MoodLevel::Amazing, MoodLevel::Good]
            .into_iter()
            .enumerate()
        {
            let when = now - Duration::days(i as i64);
            repo.append_entry(
                "alex",
                &JournalEntry::from_parts(format!("e{}", i), when, mood, "ok"),
            )
            .unwrap();
        }

        let stats = StatsService::new(repo, "alex").summary(now, &Utc).unwrap();
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.most_frequent, Some(MoodLevel::Good));
        assert_eq!(stats.streak, 3);
        assert!((stats.average_score - 13.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_empty() {
        let now = Utc.with_ymd_and_hms(2025, 7, 4, 18, 0, 0).unwrap();
        let stats = StatsService::new(InMemoryRepository::new(), "alex")
            .summary(now, &Utc)
            .unwrap();
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.most_frequent, None);
    }
}

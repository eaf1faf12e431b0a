//! Recommend catalog items from the mood history

use crate::domain::catalog::{Catalog, CatalogItem, Category};
use crate::domain::mood::MoodLevel;
use crate::domain::mood_log::latest_on;
use crate::domain::recommend::{filter_by_category, mood_pattern, shortlist};
use crate::error::Result;
use crate::infrastructure::JournalRepository;
use chrono::NaiveDate;

/// What the recommend command shows
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationSet {
    pub pattern: Vec<MoodLevel>,
    pub primary: MoodLevel,
    /// Mood checked in today, if any
    pub today: Option<MoodLevel>,
    pub insight: &'static str,
    pub items: Vec<CatalogItem>,
}

pub struct RecommendService<R> {
    repository: R,
    owner: String,
    catalog: Catalog,
}

impl<R: JournalRepository> RecommendService<R> {
    pub fn new(repository: R, owner: impl Into<String>, catalog: Catalog) -> Self {
        RecommendService {
            repository,
            owner: owner.into(),
            catalog,
        }
    }

    /// Recompute the shortlist from the full history.
    ///
    /// `today` selects which mood check-in counts as today's mood.
    pub fn recommend(
        &self,
        today: NaiveDate,
        category: Option<Category>,
    ) -> Result<RecommendationSet> {
        let entries = self.repository.list_entries(&self.owner)?;
        let logs = self.repository.list_mood_logs(&self.owner)?;
        let todays_mood = latest_on(&logs, today).map(|log| log.mood);

        let pattern = mood_pattern(&entries, todays_mood);
        let primary = pattern.first().copied().unwrap_or_default();
        let items = filter_by_category(&shortlist(&pattern, &self.catalog), category);

        tracing::debug!(
            owner = %self.owner,
            entries = entries.len(),
            primary = %primary,
            items = items.len(),
            "computed recommendations"
        );

        Ok(RecommendationSet {
            pattern,
            primary,
            today: todays_mood,
            insight: primary.insight(),
            items,
        })
    }
}

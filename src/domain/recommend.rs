//! Mood-driven recommendation selection
//!
//! The selector looks at the most recent entries, weights an explicit
//! "today" mood on top, and turns the resulting mood pattern into a short,
//! rating-ordered list of catalog items. Everything is recomputed from the
//! full history on each call.

use crate::domain::catalog::{Catalog, CatalogItem, Category};
use crate::domain::entry::JournalEntry;
use crate::domain::mood::MoodLevel;
use std::collections::HashSet;

/// Longest shortlist returned
pub const MAX_RECOMMENDATIONS: usize = 6;
/// Entries considered, newest first
pub const RECENT_WINDOW: usize = 7;
/// Extra weight given to an explicit mood for today
pub const TODAY_WEIGHT: u32 = 2;
/// Moods kept in the pattern
pub const PATTERN_SIZE: usize = 3;

/// Weighted mood counts over the recent window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoodProfile {
    counts: [u32; 5],
}

impl MoodProfile {
    pub fn build(entries: &[JournalEntry], today: Option<MoodLevel>) -> Self {
        let mut recent: Vec<&JournalEntry> = entries.iter().collect();
        recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        recent.truncate(RECENT_WINDOW);

        let mut profile = MoodProfile::default();
        for entry in recent {
            profile.counts[entry.mood.index()] += 1;
        }
        if let Some(mood) = today {
            profile.counts[mood.index()] += TODAY_WEIGHT;
        }
        profile
    }

    pub fn count(&self, mood: MoodLevel) -> u32 {
        self.counts[mood.index()]
    }

    /// Moods with a non-zero count, most frequent first.
    /// Equal counts keep natural order (amazing before good, ...).
    pub fn ranked(&self) -> Vec<(MoodLevel, u32)> {
        let mut ranked: Vec<(MoodLevel, u32)> = MoodLevel::ALL
            .into_iter()
            .map(|mood| (mood, self.count(mood)))
            .filter(|(_, count)| *count > 0)
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Top moods of the weighted recent history; `[okay]` when there is nothing
/// to go on.
pub fn mood_pattern(entries: &[JournalEntry], today: Option<MoodLevel>) -> Vec<MoodLevel> {
    let pattern: Vec<MoodLevel> = MoodProfile::build(entries, today)
        .ranked()
        .into_iter()
        .take(PATTERN_SIZE)
        .map(|(mood, _)| mood)
        .collect();

    if pattern.is_empty() {
        vec![MoodLevel::Okay]
    } else {
        pattern
    }
}

/// Categories pulled in regardless of mood match for a given primary mood
pub fn widening_categories(primary: MoodLevel) -> &'static [Category] {
    if primary.is_negative() {
        &[Category::Healing, Category::Motivational]
    } else if primary.is_positive() {
        &[Category::Motivational, Category::Alignment]
    } else {
        &[]
    }
}

/// Every item that qualifies for `pattern`, before ranking and truncation.
///
/// Direct mood matches come first in catalog order, followed by widened
/// items that were not already matched.
pub fn candidates<'a>(pattern: &[MoodLevel], catalog: &'a Catalog) -> Vec<&'a CatalogItem> {
    let mut selected: Vec<&CatalogItem> = catalog
        .items()
        .iter()
        .filter(|item| item.suits_any(pattern))
        .collect();

    let Some(primary) = pattern.first() else {
        return selected;
    };

    let widen = widening_categories(*primary);
    if !widen.is_empty() {
        let mut seen: HashSet<&str> = selected.iter().map(|item| item.id.as_str()).collect();
        for item in catalog.items() {
            if widen.contains(&item.category) && seen.insert(item.id.as_str()) {
                selected.push(item);
            }
        }
    }

    selected
}

/// Ranked shortlist for a pattern: highest rating first, at most
/// [`MAX_RECOMMENDATIONS`] items.
pub fn shortlist(pattern: &[MoodLevel], catalog: &Catalog) -> Vec<CatalogItem> {
    let mut items = candidates(pattern, catalog);
    items.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    items.truncate(MAX_RECOMMENDATIONS);
    items.into_iter().cloned().collect()
}

/// Recommend catalog items for an entry history and optional mood for today.
pub fn recommend(
    entries: &[JournalEntry],
    today: Option<MoodLevel>,
    catalog: &Catalog,
) -> Vec<CatalogItem> {
    shortlist(&mood_pattern(entries, today), catalog)
}

/// Narrow a shortlist to one category; `None` keeps everything.
pub fn filter_by_category(items: &[CatalogItem], category: Option<Category>) -> Vec<CatalogItem> {
    items
        .iter()
        .filter(|item| category.is_none_or(|c| item.category == c))
        .cloned()
        .collect()
}

//! Mood analytics: distribution, trend and journaling streak

use crate::domain::entry::JournalEntry;
use crate::domain::mood::MoodLevel;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use std::collections::HashSet;

/// Trend changes smaller than this read as steady
const TREND_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodShare {
    pub mood: MoodLevel,
    pub count: usize,
    /// 0-100
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Improving,
    Steady,
    Declining,
}

impl TrendDirection {
    pub fn from_delta(delta: f64) -> Self {
        if delta > TREND_THRESHOLD {
            TrendDirection::Improving
        } else if delta < -TREND_THRESHOLD {
            TrendDirection::Declining
        } else {
            TrendDirection::Steady
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Improving => "improving",
            TrendDirection::Steady => "steady",
            TrendDirection::Declining => "declining",
        }
    }
}

/// Everything the stats view shows
#[derive(Debug, Clone, PartialEq)]
pub struct MoodSummary {
    pub total_entries: usize,
    pub average_score: f64,
    pub most_frequent: Option<MoodLevel>,
    pub distribution: Vec<MoodShare>,
    pub trend: f64,
    pub streak: u32,
}

impl MoodSummary {
    pub fn trend_direction(&self) -> TrendDirection {
        TrendDirection::from_delta(self.trend)
    }
}

/// Count and share of each mood that occurs, most frequent first.
pub fn distribution(entries: &[JournalEntry]) -> Vec<MoodShare> {
    let total = entries.len();
    let mut counts = [0usize; 5];
    for entry in entries {
        counts[entry.mood.index()] += 1;
    }

    let mut shares: Vec<MoodShare> = MoodLevel::ALL
        .into_iter()
        .filter(|mood| counts[mood.index()] > 0)
        .map(|mood| {
            let count = counts[mood.index()];
            MoodShare {
                mood,
                count,
                percentage: count as f64 / total as f64 * 100.0,
            }
        })
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

/// Mean mood score, or `None` for no entries
pub fn average_score<'a, I>(entries: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a JournalEntry>,
{
    let (sum, count) = entries
        .into_iter()
        .fold((0u32, 0u32), |(sum, count), entry| {
            (sum + u32::from(entry.mood.score()), count + 1)
        });

    if count == 0 {
        None
    } else {
        Some(f64::from(sum) / f64::from(count))
    }
}

/// Average score over the last 7 days minus the average over the 7 days
/// before that. Zero when either window has no entries.
pub fn trend(entries: &[JournalEntry], now: DateTime<Utc>) -> f64 {
    let week_ago = now - Duration::days(7);
    let two_weeks_ago = now - Duration::days(14);

    let recent = average_score(
        entries
            .iter()
            .filter(|e| e.timestamp >= week_ago && e.timestamp <= now),
    );
    let previous = average_score(
        entries
            .iter()
            .filter(|e| e.timestamp >= two_weeks_ago && e.timestamp < week_ago),
    );

    match (recent, previous) {
        (Some(recent), Some(previous)) => recent - previous,
        _ => 0.0,
    }
}

/// Consecutive days with at least one entry, counting back from `today`.
///
/// Entry dates are taken in `tz`, the owner's local time zone. A day without
/// an entry ends the streak, so no entry today means a streak of zero.
pub fn streak<Tz: TimeZone>(entries: &[JournalEntry], today: NaiveDate, tz: &Tz) -> u32 {
    let days: HashSet<NaiveDate> = entries
        .iter()
        .map(|e| e.timestamp.with_timezone(tz).date_naive())
        .collect();

    let mut count = 0;
    let mut day = today;
    while days.contains(&day) {
        count += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    count
}

pub fn summary<Tz: TimeZone>(entries: &[JournalEntry], now: DateTime<Utc>, tz: &Tz) -> MoodSummary {
    let today = now.with_timezone(tz).date_naive();
    let distribution = distribution(entries);

    MoodSummary {
        total_entries: entries.len(),
        average_score: average_score(entries).unwrap_or(0.0),
        most_frequent: distribution.first().map(|share| share.mood),
        distribution,
        trend: trend(entries, now),
        streak: streak(entries, today, tz),
    }
}

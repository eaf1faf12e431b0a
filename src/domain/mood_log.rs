//! Daily mood check-ins

use crate::domain::mood::MoodLevel;
use crate::domain::validation::validate_note;
use crate::error::{SolaceError, ValidationError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Check-ins allowed per owner per calendar day
pub const DAILY_MOOD_LIMIT: usize = 3;

/// One mood check-in. The mood is stored as its 1-5 score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodLog {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(with = "mood_score")]
    pub mood: MoodLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl MoodLog {
    pub fn new(
        mood: MoodLevel,
        note: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Ok(MoodLog {
            id: Uuid::new_v4().to_string(),
            timestamp: now,
            mood,
            note: validate_note(note)?,
        })
    }

    /// Calendar day this log counts against (UTC)
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// Reject `incoming` if `existing` already holds the daily limit for its day.
pub fn check_daily_limit(existing: &[MoodLog], incoming: &MoodLog) -> Result<(), SolaceError> {
    let day = incoming.day();
    let count = existing.iter().filter(|log| log.day() == day).count();

    if count >= DAILY_MOOD_LIMIT {
        return Err(SolaceError::DailyMoodLimit {
            date: day,
            limit: DAILY_MOOD_LIMIT,
        });
    }
    Ok(())
}

/// Most recent log recorded on `day`
pub fn latest_on(logs: &[MoodLog], day: NaiveDate) -> Option<&MoodLog> {
    logs.iter()
        .filter(|log| log.day() == day)
        .max_by_key(|log| log.timestamp)
}

mod mood_score {
    use crate::domain::mood::MoodLevel;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(mood: &MoodLevel, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(mood.score())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<MoodLevel, D::Error> {
        let score = u8::deserialize(deserializer)?;
        MoodLevel::from_score(score)
            .ok_or_else(|| de::Error::custom(format!("mood score out of range: {}", score)))
    }
}

//! Mood levels and their presentation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Self-reported mood, from best to worst.
///
/// Declaration order is the natural order used to break ties whenever moods
/// are ranked, so `Amazing` sorts first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum MoodLevel {
    Amazing,
    Good,
    #[default]
    Okay,
    Down,
    Tough,
}

impl MoodLevel {
    /// Every mood in natural order
    pub const ALL: [MoodLevel; 5] = [
        MoodLevel::Amazing,
        MoodLevel::Good,
        MoodLevel::Okay,
        MoodLevel::Down,
        MoodLevel::Tough,
    ];

    /// Numeric score, 5 for amazing down to 1 for tough
    pub fn score(&self) -> u8 {
        match self {
            MoodLevel::Amazing => 5,
            MoodLevel::Good => 4,
            MoodLevel::Okay => 3,
            MoodLevel::Down => 2,
            MoodLevel::Tough => 1,
        }
    }

    /// Inverse of [`MoodLevel::score`]
    pub fn from_score(score: u8) -> Option<Self> {
        match score {
            5 => Some(MoodLevel::Amazing),
            4 => Some(MoodLevel::Good),
            3 => Some(MoodLevel::Okay),
            2 => Some(MoodLevel::Down),
            1 => Some(MoodLevel::Tough),
            _ => None,
        }
    }

    /// Position in natural order (0 for amazing)
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, MoodLevel::Down | MoodLevel::Tough)
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, MoodLevel::Amazing | MoodLevel::Good)
    }

    pub fn name(&self) -> &'static str {
        match self {
            MoodLevel::Amazing => "amazing",
            MoodLevel::Good => "good",
            MoodLevel::Okay => "okay",
            MoodLevel::Down => "down",
            MoodLevel::Tough => "tough",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoodLevel::Amazing => "Amazing",
            MoodLevel::Good => "Good",
            MoodLevel::Okay => "Okay",
            MoodLevel::Down => "Down",
            MoodLevel::Tough => "Tough",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MoodLevel::Amazing => "😄",
            MoodLevel::Good => "😊",
            MoodLevel::Okay => "😐",
            MoodLevel::Down => "😔",
            MoodLevel::Tough => "😢",
        }
    }

    /// Check-in description shown next to the mood
    pub fn description(&self) -> &'static str {
        match self {
            MoodLevel::Amazing => "Feeling fantastic and energized",
            MoodLevel::Good => "Positive and content",
            MoodLevel::Okay => "Neutral, neither up nor down",
            MoodLevel::Down => "Feeling a bit low today",
            MoodLevel::Tough => "Having a difficult time",
        }
    }

    /// Recommendation insight for a primary mood
    pub fn insight(&self) -> &'static str {
        match self {
            MoodLevel::Amazing => "You're feeling fantastic! Here are some books to maintain your positive energy and inspire further growth.",
            MoodLevel::Good => "You're in a positive headspace! These books will complement your good mood and provide inspiration.",
            MoodLevel::Okay => "You're in a neutral space, which is perfect for exploring new perspectives and gentle growth.",
            MoodLevel::Down => "It's okay to feel down sometimes. These books offer comfort, understanding, and gentle guidance.",
            MoodLevel::Tough => "You're going through a difficult time. These books provide healing, support, and hope for brighter days.",
        }
    }
}

impl fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MoodLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        if let Ok(score) = normalized.parse::<u8>() {
            return MoodLevel::from_score(score).ok_or_else(|| s.to_string());
        }

        MoodLevel::ALL
            .into_iter()
            .find(|mood| mood.name() == normalized)
            .ok_or_else(|| s.to_string())
    }
}

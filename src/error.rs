//! Error types for solace

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Input rejected before it reaches the repository
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Entry is empty; write at least one character")]
    EntryTooShort,

    #[error("Entry is {len} characters; the limit is {max}")]
    EntryTooLong { len: usize, max: usize },

    #[error("Mood note is {len} characters; the limit is {max}")]
    NoteTooLong { len: usize, max: usize },

    #[error("Tag '{tag}' is longer than {max} characters")]
    TagTooLong { tag: String, max: usize },

    #[error("Too many tags ({count}); at most {max} are allowed")]
    TooManyTags { count: usize, max: usize },

    #[error("Invalid owner id: '{0}'")]
    InvalidOwner(String),
}

/// Main error type for solace
#[derive(Debug, Error)]
pub enum SolaceError {
    #[error("Not a solace directory: {0}")]
    NotSolaceDirectory(PathBuf),

    #[error("Invalid mood: {0}")]
    InvalidMood(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Daily mood limit reached for {date}: at most {limit} check-ins per day")]
    DailyMoodLimit { date: NaiveDate, limit: usize },

    #[error("A {0} save is already in progress")]
    SaveInProgress(&'static str),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl SolaceError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SolaceError::NotSolaceDirectory(_) => 2,
            SolaceError::InvalidMood(_)
            | SolaceError::InvalidCategory(_)
            | SolaceError::Validation(_) => 3,
            SolaceError::DailyMoodLimit { .. } => 4,
            SolaceError::SaveInProgress(_) => 5,
            _ => 1,
        }
    }

    /// Whether the user can simply try the same action again
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SolaceError::SaveInProgress(_) | SolaceError::Storage(_) | SolaceError::Io(_)
        )
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        let message = self.suggestion_text();
        if self.is_retryable() {
            format!("{}\n\nThis can be temporary; run the command again.", message)
        } else {
            message
        }
    }

    fn suggestion_text(&self) -> String {
        match self {
            SolaceError::NotSolaceDirectory(path) => {
                format!(
                    "Not a solace directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'solace init' in this directory to create a new journal\n\
                    • Navigate to an existing solace directory\n\
                    • Set SOLACE_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            SolaceError::InvalidMood(input) => {
                format!(
                    "Invalid mood: '{}'\n\n\
                    Valid moods:\n\
                    • amazing, good, okay, down, tough\n\
                    • or a score from 5 (amazing) to 1 (tough)\n\n\
                    Examples:\n\
                    solace mood good\n\
                    solace write \"Long walk by the river\" --mood 4",
                    input
                )
            }
            SolaceError::InvalidCategory(input) => {
                format!(
                    "Invalid category: '{}'\n\n\
                    Valid categories:\n\
                    • motivational, alignment, healing, growth, all\n\n\
                    Example:\n\
                    solace recommend --category healing",
                    input
                )
            }
            SolaceError::Validation(err) => {
                format!(
                    "{}\n\n\
                    Nothing was saved. Adjust the text and try again.",
                    err
                )
            }
            SolaceError::DailyMoodLimit { date, limit } => {
                format!(
                    "You've already checked in {} times on {}.\n\n\
                    Suggestions:\n\
                    • Capture how you feel in a journal entry instead: solace write \"...\" --mood okay\n\
                    • Check in again tomorrow",
                    limit,
                    date.format("%d-%m-%Y")
                )
            }
            SolaceError::Storage(msg) => {
                format!(
                    "{}\n\n\
                    Your previous data is unchanged.",
                    msg
                )
            }
            SolaceError::Catalog(msg) => {
                format!(
                    "{}\n\n\
                    Fix .solace/catalog.toml or remove it to use the built-in books.",
                    msg
                )
            }
            SolaceError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: solace config owner alex",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SolaceError
pub type Result<T> = std::result::Result<T, SolaceError>;

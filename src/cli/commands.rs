//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "solace")]
#[command(about = "Terminal wellbeing journal with mood check-ins", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Owner id the journal writes entries for (default: login name)
        #[arg(short, long)]
        owner: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Write a journal entry
    Write {
        /// Entry text
        text: String,

        /// How you feel: amazing, good, okay, down, tough (or 5-1)
        #[arg(short, long)]
        mood: String,

        /// Prompt the entry answers; use `solace prompt` for today's
        #[arg(short, long)]
        prompt: Option<String>,

        /// Tag for the entry (repeatable)
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Check in with today's mood (up to 3 times a day)
    Mood {
        /// amazing, good, okay, down, tough (or 5-1)
        mood: String,

        /// Short note about the check-in
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Show journal entries, newest first
    Timeline {
        /// Page to show (6 entries per page)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Mood statistics: distribution, weekly trend, streak
    Stats,

    /// Book recommendations for your recent moods
    Recommend {
        /// Only show one category: motivational, alignment, healing, growth, all
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Ask for songs, movies, places, food or books.
    /// Without a message, reads one message per line from stdin.
    Chat {
        /// Message to answer
        message: Vec<String>,
    },

    /// Guided breathing exercise (inhale 4s, hold 4s, exhale 6s)
    Breathe {
        /// Number of full cycles
        #[arg(short, long, default_value_t = 3)]
        cycles: u32,

        /// Milliseconds per tick
        #[arg(long, default_value_t = 1000)]
        tick_ms: u64,
    },

    /// Show today's affirmation
    Affirm,

    /// Show today's writing prompt
    Prompt,
}

//! solace - Terminal wellbeing journal
//!
//! A command-line journal that pairs written entries with mood check-ins,
//! turns the recent mood history into book recommendations, and offers a
//! few small wellbeing tools (breathing timer, keyword chat, daily prompts).

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SolaceError;

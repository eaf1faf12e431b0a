//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod memory;
pub mod repository;

pub use config::Config;
pub use memory::InMemoryRepository;
pub use repository::{FileSystemRepository, JournalRepository};

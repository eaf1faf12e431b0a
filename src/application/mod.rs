//! Application layer - Use cases and orchestration

pub mod init;
pub mod journal;
pub mod manage_config;
pub mod recommend;
pub mod save_guard;
pub mod stats;

pub use journal::{JournalService, TimelinePage, PAGE_SIZE};
pub use manage_config::ConfigService;
pub use recommend::{RecommendService, RecommendationSet};
pub use save_guard::SaveGuard;
pub use stats::StatsService;

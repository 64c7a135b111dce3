//! Port contracts for taskboard persistence collaborators.

mod cache;
mod processing_log;
mod repository;

pub use cache::{CacheKeys, LocalCache, LocalCacheError, LocalCacheResult};
pub use processing_log::{
    ProcessingLogRepository, ProcessingLogRepositoryError, ProcessingLogResult,
};
pub use repository::{TaskboardRepository, TaskboardRepositoryError, TaskboardRepositoryResult};

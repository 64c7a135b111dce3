//! Thread-safe in-memory adapters for tests and offline operation.

mod cache;
mod processing_log;
mod taskboard;

pub use cache::InMemoryLocalCache;
pub use processing_log::InMemoryProcessingLog;
pub use taskboard::InMemoryTaskboardRepository;

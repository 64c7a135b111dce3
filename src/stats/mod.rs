//! Dashboard statistics caching.
//!
//! The dashboards recompute processing statistics on every view unless a
//! recent result is cached. Instead of module-global state with ad-hoc
//! expiry, caching is an explicit object with an injected clock, so expiry
//! is deterministic under test.

mod cache;

pub use cache::StatsCache;

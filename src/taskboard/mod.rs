//! Taskboard record synchronization for the operations-centre dashboard.
//!
//! A taskboard is the per-shift procedural checklist an operator works
//! through during a turn. One durable row exists per
//! `(user, form type, date)`; the synchronizer keeps the operator's
//! in-memory form state mirrored to that row, with a local-cache fallback
//! for unauthenticated sessions and a self-healing write-through when the
//! durable row has been lost. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

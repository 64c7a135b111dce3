//! Opsdesk: persistence core for the bank IT operations-centre dashboard.
//!
//! This crate provides the non-UI core of the operations dashboard: keeping
//! shift taskboard records mirrored to durable storage, maintaining the
//! system-wide processing log, and generating legacy PS2 payment files.
//!
//! # Architecture
//!
//! Opsdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, local cache)
//!
//! # Modules
//!
//! - [`taskboard`]: Taskboard record synchronization and the processing log
//! - [`ps2`]: Fixed-width PS2 payment-file encoding
//! - [`stats`]: Clock-driven expiring cache for dashboard statistics

pub mod ps2;
pub mod stats;
pub mod taskboard;

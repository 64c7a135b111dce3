//! Adapter implementations of the taskboard ports.

pub mod memory;
pub mod postgres;

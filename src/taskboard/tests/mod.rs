//! Unit and service tests for taskboard synchronization.

mod debounce_tests;
mod support;

// Path: crates/telemetry/src/lib.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # Custody Telemetry
//!
//! This crate provides the observability infrastructure for the custodial
//! transaction hooks: structured logging initialization and abstract metrics
//! sinks with a Prometheus backend.

/// The initialization routine for global structured logging.
pub mod init;
/// The concrete implementation of metrics sinks using the `prometheus` crate.
pub mod prometheus;
/// Abstract traits (`*MetricsSink`) that define the contract for metrics reporting.
pub mod sinks;
/// A simple RAII timer for measuring the duration of a plugin round trip.
pub mod time;

// Re-export the public helper functions for easy access to the global sinks.
pub use init::init;
pub use sinks::{error_metrics, hook_metrics};

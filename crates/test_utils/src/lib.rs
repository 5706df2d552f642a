// Path: crates/test_utils/src/lib.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # Custody Test Utilities
//!
//! Mock wallet state, in-memory collaborators and assertion helpers for
//! testing the custodial transaction hooks.

pub mod assertions;
pub mod directory;
pub mod fixtures;
pub mod pipeline;

pub use directory::InMemoryAccountDirectory;
pub use pipeline::RecordingPipeline;

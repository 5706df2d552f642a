// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]
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

//! # Custody Types
//!
//! This crate is the foundational library for the custodial transaction hooks,
//! containing all core data structures, error types, and configuration objects.
//!
//! ## Architectural Role
//!
//! As the base crate, `custody-types` has minimal dependencies and is itself a
//! dependency for every other crate in the workspace. This structure prevents
//! circular dependencies and provides a stable, canonical definition for shared
//! types like `TransactionRecord`, `Account`, the plugin envelopes, and the
//! error enums.

/// A top-level, crate-wide `Result` type alias with a default error type.
pub type Result<T, E = crate::error::HookError> = std::result::Result<T, E>;

/// Core application-level data structures: transaction records, accounts, and plugin envelopes.
pub mod app;
/// CAIP-2 / CAIP-10 chain and address formatting helpers.
pub mod caip;
/// Shared configuration structures loaded from TOML.
pub mod config;
/// A unified set of all error types used across the workspace.
pub mod error;
/// A prelude containing useful extension traits like `OptionExt`.
pub mod prelude;

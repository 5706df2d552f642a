// Path: crates/api/src/lib.rs

//! # Custody API Crate Lints
//!
//! This crate enforces a strict set of lints to ensure panic-free code.
//! Panics are disallowed in non-test code to promote robust error handling.
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::indexing_slicing
    )
)]
//! # Custody API
//!
//! Core traits for the custodial transaction hooks. This crate defines the
//! narrow capabilities the hooks are given (account lookups, the plugin host,
//! the pipeline's update operation) and the hook contracts the pipeline calls.

/// The `AccountDirectory` capability for address-keyed account lookups.
pub mod accounts;
/// Traits for the batched-call (`wallet_sendCalls`) collaborators.
pub mod batch;
/// Re-exports all core error types from the central `custody-types` crate.
pub mod error;
/// The `PluginHost` capability and its HTTP and mock implementations.
pub mod plugin;
/// The pipeline update capability and the lifecycle hook traits.
pub mod transaction;

/// A curated set of the most commonly used traits and types.
pub mod prelude {
    pub use crate::accounts::AccountDirectory;
    pub use crate::batch::{NetworkClientResolver, TransactionBatcher, UpgradePreferences};
    pub use crate::error::{
        BatchError, ErrorCode, HookError, PipelineError, PluginError, StateError,
    };
    pub use crate::plugin::PluginHost;
    pub use crate::transaction::hooks::{CheckPendingHook, PublishHook};
    pub use crate::transaction::CustodialTransactionUpdater;
}

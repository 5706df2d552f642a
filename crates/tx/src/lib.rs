// Path: crates/tx/src/lib.rs
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

//! Transaction pipeline hooks for custodial accounts.
//!
//! [`custodial::DeferredPublicationHook`] decides, per transaction, whether the
//! pipeline broadcasts and polls a transaction itself or hands it to the
//! account's custodian. [`batch`] carries the `wallet_sendCalls` helpers.

pub mod batch;
pub mod custodial;

pub use custodial::{should_defer_publication, DeferredPublicationHook};

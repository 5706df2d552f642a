// Path: crates/api/src/error/mod.rs
// Re-export all core error types from the central types crate.
pub use custody_types::error::{
    BatchError, ChainIdError, ConfigError, ErrorCode, HookError, PipelineError, PluginError,
    StateError,
};
pub use custody_types::Result;

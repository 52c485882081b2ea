//! # formflow-rs-engine
//!
//! The form-state engine: a renderer-agnostic container for one form's
//! field values, validation errors, touched set, and submission status.
//!
//! The engine performs no I/O and owns no rendering. Callers route UI
//! events in ([`FormEngine::set_value`], [`FormEngine::blur`],
//! [`FormEngine::submit`]), read state back out
//! ([`FormEngine::snapshot`]), and signal completion of their own
//! asynchronous submit work ([`FormEngine::set_submitting`]).
//!
//! ## Modules
//!
//! - [`config`] - One-time engine configuration and its builder
//! - [`engine`] - The engine itself
//! - [`events`] - Per-instance lifecycle signals
//! - [`state`] - Status enum and read-only snapshots

pub mod config;
pub mod engine;
pub mod events;
pub mod state;

// Re-export the most commonly used types at the crate root.
pub use config::{FormConfig, FormConfigBuilder, SubmitFn, ValidateFn};
pub use engine::FormEngine;
pub use events::FormSignals;
pub use formflow_rs_core::error::{FieldErrors, FormFlowError, FormFlowResult};
pub use state::{FormSnapshot, SubmitStatus};

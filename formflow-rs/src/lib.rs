//! # formflow-rs
//!
//! A reusable form-state engine for Rust. The engine owns one form's field
//! values, validation errors, touched set, and submission status; callers
//! route UI events in, read snapshots out, and keep full ownership of
//! rendering and I/O.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. Depend on `formflow-rs` for the whole toolkit, or on individual
//! crates for finer-grained control.

/// Core types: error taxonomy, field-error maps, and logging setup.
pub use formflow_rs_core as core;

/// The form-state engine: values, triggers, touched tracking, and the
/// submission gate.
pub use formflow_rs_engine as engine;

/// Validation rules: reusable field validators and composable rule sets.
#[cfg(feature = "validators")]
pub use formflow_rs_validators as validators;

/// Signal dispatcher for decoupled observation of form lifecycle events.
#[cfg(feature = "signals")]
pub use formflow_rs_signals as signals;

/// Test utilities: recording submit callbacks and scripted event
/// sequences.
#[cfg(feature = "testing")]
pub use formflow_rs_test as test;

// The working set most callers need, at the crate root.
pub use formflow_rs_core::error::{FieldErrors, FormFlowError, FormFlowResult};
pub use formflow_rs_engine::{FormConfig, FormEngine, FormSnapshot, SubmitStatus};

//! # formflow-rs-core
//!
//! Core types for the formflow-rs form engine. This crate has no dependency
//! on the engine itself and provides the foundation shared by all other
//! crates in the workspace.
//!
//! ## Modules
//!
//! - [`error`] - Error types, the field-error map, and result aliases
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;

// Re-export the most commonly used types at the crate root.
pub use error::{FieldErrors, FormFlowError, FormFlowResult, ValidationError};

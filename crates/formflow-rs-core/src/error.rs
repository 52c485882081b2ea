//! Core error types for the formflow-rs engine.
//!
//! The error taxonomy is deliberately small. Field validation failures are
//! data, not faults: they travel through [`FieldErrors`] in the engine's
//! state snapshot and are never raised. The [`FormFlowError`] enum covers
//! the remaining conditions that do fail loudly: referencing a field that
//! was never declared, and constructing an engine from an incomplete
//! configuration.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// The per-field error map surfaced through the engine's state.
///
/// Keys are field names; values are human-readable messages for fields
/// currently judged invalid. A field absent from the map has no *known*
/// error, which is not the same as having been validated: before its first
/// validation trigger a field simply has not been looked at yet.
pub type FieldErrors = HashMap<String, String>;

/// A structured validation failure produced by a validator.
///
/// Carries a human-readable `message`, a short machine-readable `code`
/// (e.g. `"required"`, `"min_length"`), and optional `params` giving
/// context for the message. Rule sets use the code to apply per-form
/// message overrides.
///
/// # Examples
///
/// ```
/// use formflow_rs_core::error::ValidationError;
///
/// let err = ValidationError::new("This field is required.", "required");
/// assert_eq!(err.code, "required");
///
/// let err = ValidationError::new("Too short.", "min_length").with_param("min", "8");
/// assert_eq!(err.params.get("min").unwrap(), "8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// The human-readable error message.
    pub message: String,
    /// A short code identifying the type of validation failure.
    pub code: String,
    /// Additional parameters providing context for the error message.
    pub params: HashMap<String, String>,
}

impl ValidationError {
    /// Creates a new `ValidationError` with a message and code.
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            params: HashMap::new(),
        }
    }

    /// Adds a parameter to this validation error.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// The primary error type for the formflow-rs workspace.
///
/// Unlike validation failures, these are programmer errors or configuration
/// mistakes: they are returned as `Err` and are not recoverable through the
/// engine's own state.
#[derive(Error, Debug)]
pub enum FormFlowError {
    /// An operation referenced a field name that was not declared at
    /// creation time. The set of field names is fixed for the life of an
    /// engine instance.
    #[error("unknown field: {field}")]
    UnknownField {
        /// The offending field name.
        field: String,
    },

    /// An engine was constructed from an incomplete or inconsistent
    /// configuration.
    #[error("improperly configured: {0}")]
    ImproperlyConfigured(String),

    /// A structured validation failure escaped into a fallible context.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl FormFlowError {
    /// Shorthand for an [`FormFlowError::UnknownField`] error.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }
}

/// A convenience type alias for `Result<T, FormFlowError>`.
pub type FormFlowResult<T> = Result<T, FormFlowError>;

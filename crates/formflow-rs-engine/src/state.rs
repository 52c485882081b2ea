//! Submission status and read-only state snapshots.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use formflow_rs_core::error::FieldErrors;

/// The submission lifecycle status.
///
/// `Submitting` is entered only through the submission gate: a submit
/// attempt whose whole-form validation produced no errors. It is left when
/// the caller signals completion of its own asynchronous work, or on
/// reset. There is no terminal state; an engine instance is reusable
/// indefinitely.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    /// Not currently submitting.
    #[default]
    Idle,
    /// The submission gate passed and the submit callback was invoked; the
    /// caller has not yet signalled completion.
    Submitting,
}

impl SubmitStatus {
    /// Returns `true` for [`SubmitStatus::Submitting`].
    pub const fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// A read-only snapshot of one form's complete state.
///
/// Snapshots are independent copies: mutating the engine after taking one
/// does not change it, which makes them safe to hand to rendering layers
/// or store for comparison in tests.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormSnapshot<V> {
    /// Current field values, keyed by field name.
    pub values: HashMap<String, V>,
    /// Message per field currently judged invalid. A field absent from the
    /// map has no known error, which is not the same as having been
    /// validated.
    pub errors: FieldErrors,
    /// Fields the user has blurred away from, plus every field once a
    /// submit has been attempted.
    pub touched: HashSet<String>,
    /// The submission lifecycle status.
    pub status: SubmitStatus,
}

impl<V> FormSnapshot<V> {
    /// Returns `true` if no field currently has a known error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `true` if the field has been touched.
    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }
}

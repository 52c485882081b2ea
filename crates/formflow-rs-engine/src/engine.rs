//! The form-state engine.
//!
//! [`FormEngine`] owns one form's values, derived errors, touched set, and
//! submission status, and applies the validation triggers:
//!
//! 1. Changing a field revalidates **only that field's** message, and only
//!    once the field has been touched. Fields the user has not reached yet
//!    stay quiet, and editing one field never flips another field's
//!    displayed error.
//! 2. Blurring a field marks it touched and revalidates that field's
//!    message.
//! 3. Submitting recomputes the whole error map, marks every field
//!    touched so all messages become visible, and invokes the submit
//!    callback only when the map came back empty.
//!
//! Because change and blur merge only the triggering field's message, a
//! validate function with cross-field rules (confirm-password) can leave a
//! stale message on the dependent field until that field is itself changed
//! or blurred again. This is a deliberate property of the trigger rules,
//! not an accident; callers who want eager cross-field refresh can blur
//! the dependent field themselves.
//!
//! The engine is single-writer: operations take `&mut self`, complete
//! synchronously, and apply strictly in call order. Callers in an
//! environment with concurrent event dispatch must serialize calls into
//! the engine.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use formflow_rs_core::error::{FieldErrors, FormFlowError, FormFlowResult};

use crate::config::{FormConfig, SubmitFn, ValidateFn};
use crate::events::FormSignals;
use crate::state::{FormSnapshot, SubmitStatus};

/// A single form's state container and event protocol.
///
/// Created once per form instance from a [`FormConfig`]; the field set is
/// fixed from the initial values and never changes. The generic parameter
/// `V` is the uniform per-field value type, typically `String`.
///
/// # Examples
///
/// ```
/// use formflow_rs_engine::{FormConfig, FormEngine, SubmitStatus};
/// use formflow_rs_core::error::FieldErrors;
///
/// let config = FormConfig::builder()
///     .field("email", String::new())
///     .validate(|values| {
///         let mut errors = FieldErrors::new();
///         if values["email"].trim().is_empty() {
///             errors.insert("email".into(), "Email address is required.".into());
///         }
///         errors
///     })
///     .on_submit(|_| {})
///     .build()
///     .unwrap();
///
/// let mut form = FormEngine::new(config);
/// form.submit();
/// assert_eq!(form.status(), SubmitStatus::Idle);
/// assert_eq!(form.error("email"), Some("Email address is required."));
/// ```
pub struct FormEngine<V: Clone + 'static> {
    initial_values: HashMap<String, V>,
    values: HashMap<String, V>,
    errors: FieldErrors,
    touched: HashSet<String>,
    status: SubmitStatus,
    validate: ValidateFn<V>,
    on_submit: SubmitFn<V>,
    signals: FormSignals<V>,
}

impl<V: Clone + 'static> FormEngine<V> {
    /// Creates an engine from its one-time configuration.
    pub fn new(config: FormConfig<V>) -> Self {
        Self {
            values: config.initial_values.clone(),
            initial_values: config.initial_values,
            errors: FieldErrors::new(),
            touched: HashSet::new(),
            status: SubmitStatus::Idle,
            validate: config.validate,
            on_submit: config.on_submit,
            signals: FormSignals::new(),
        }
    }

    // ── Event operations ─────────────────────────────────────────────

    /// Replaces one field's value.
    ///
    /// If the field has already been touched, the whole-form validate
    /// function is re-run against the updated values and **only this
    /// field's** error entry is updated from the result; other fields keep
    /// their previously computed messages. `touched` is unaffected.
    ///
    /// Referencing an undeclared field is a programmer error and returns
    /// [`FormFlowError::UnknownField`].
    pub fn set_value(&mut self, field: &str, value: V) -> FormFlowResult<()> {
        self.ensure_known(field)?;
        self.values.insert(field.to_string(), value);
        if self.touched.contains(field) {
            let computed = (self.validate)(&self.values);
            self.merge_field_error(field, &computed);
        }
        self.notify_state_changed();
        Ok(())
    }

    /// Marks a field touched and refreshes its error message.
    ///
    /// Re-runs the whole-form validate function and merges only this
    /// field's entry into the error map: set when present in the result,
    /// cleared when absent. Blurring an already-touched field re-runs
    /// validation but leaves `touched` unchanged.
    pub fn blur(&mut self, field: &str) -> FormFlowResult<()> {
        self.ensure_known(field)?;
        self.touched.insert(field.to_string());
        let computed = (self.validate)(&self.values);
        self.merge_field_error(field, &computed);
        self.notify_state_changed();
        Ok(())
    }

    /// Attempts a submission.
    ///
    /// Atomically: recomputes and replaces the whole error map, marks
    /// every field touched so all messages become visible, and, only when
    /// the freshly computed map is empty, transitions to
    /// [`SubmitStatus::Submitting`] and invokes the submit callback
    /// synchronously with the current values. Any single invalid field
    /// blocks the entire submission and the callback is not invoked.
    ///
    /// The engine cannot observe completion of whatever asynchronous work
    /// the callback starts; the caller must invoke
    /// [`set_submitting(false)`](Self::set_submitting) when that work
    /// finishes.
    pub fn submit(&mut self) {
        let mut computed = (self.validate)(&self.values);
        computed.retain(|field, _| self.values.contains_key(field));
        self.errors = computed;
        self.touched = self.values.keys().cloned().collect();

        if self.errors.is_empty() {
            self.status = SubmitStatus::Submitting;
            tracing::debug!("submit accepted, invoking submit callback");
            self.signals.submit_started.send(&self.snapshot());
            (self.on_submit)(&self.values);
        } else {
            tracing::debug!("submit blocked: {} invalid field(s)", self.errors.len());
            self.signals.submit_blocked.send(&self.errors);
        }
        self.notify_state_changed();
    }

    /// The caller-driven completion signal.
    ///
    /// The engine transitions to `Submitting` only through the submission
    /// gate; it returns to `Idle` only here (or on reset). Call
    /// `set_submitting(false)` when the asynchronous work started by the
    /// submit callback finishes, whether it succeeded or failed; the
    /// engine tracks "submitting" versus "not submitting", never the
    /// outcome.
    pub fn set_submitting(&mut self, submitting: bool) {
        self.status = if submitting {
            SubmitStatus::Submitting
        } else {
            SubmitStatus::Idle
        };
        self.notify_state_changed();
    }

    /// Restores the state established at creation.
    ///
    /// Values return to an independent copy of the initial snapshot,
    /// errors and touched are cleared, and status returns to `Idle`.
    pub fn reset(&mut self) {
        self.values = self.initial_values.clone();
        self.errors = FieldErrors::new();
        self.touched = HashSet::new();
        self.status = SubmitStatus::Idle;
        self.notify_state_changed();
    }

    // ── State access ─────────────────────────────────────────────────

    /// Returns an independent copy of the complete current state.
    pub fn snapshot(&self) -> FormSnapshot<V> {
        FormSnapshot {
            values: self.values.clone(),
            errors: self.errors.clone(),
            touched: self.touched.clone(),
            status: self.status,
        }
    }

    /// Current field values.
    pub fn values(&self) -> &HashMap<String, V> {
        &self.values
    }

    /// One field's current value.
    pub fn value(&self, field: &str) -> Option<&V> {
        self.values.get(field)
    }

    /// The current error map.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// One field's current error message, if any.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// The set of touched fields.
    pub fn touched(&self) -> &HashSet<String> {
        &self.touched
    }

    /// Returns `true` if the field has been touched.
    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    /// The submission lifecycle status.
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Returns `true` while the caller's submit work is outstanding.
    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }

    /// Returns `true` if no field currently has a known error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The signals this instance emits.
    pub fn signals(&self) -> &FormSignals<V> {
        &self.signals
    }

    // ── Internals ────────────────────────────────────────────────────

    fn ensure_known(&self, field: &str) -> FormFlowResult<()> {
        if self.values.contains_key(field) {
            Ok(())
        } else {
            Err(FormFlowError::unknown_field(field))
        }
    }

    /// Merges one field's entry from a freshly computed error map into the
    /// displayed errors, leaving every other field's entry as is.
    fn merge_field_error(&mut self, field: &str, computed: &FieldErrors) {
        match computed.get(field) {
            Some(message) => {
                self.errors.insert(field.to_string(), message.clone());
            }
            None => {
                self.errors.remove(field);
            }
        }
    }

    fn notify_state_changed(&self) {
        self.signals.state_changed.send(&self.snapshot());
    }
}

impl<V: Clone + Serialize + 'static> FormEngine<V> {
    /// Renders the state as a JSON context for template layers.
    ///
    /// Touched fields are listed in sorted order so the output is stable.
    pub fn context(&self) -> serde_json::Value {
        let mut touched: Vec<&String> = self.touched.iter().collect();
        touched.sort();
        serde_json::json!({
            "values": self.values,
            "errors": self.errors,
            "touched": touched,
            "status": self.status,
            "is_valid": self.errors.is_empty(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;

    fn required_both() -> FormConfig<String> {
        FormConfig::builder()
            .field("email", String::new())
            .field("password", String::new())
            .validate(|values| {
                let mut errors = FieldErrors::new();
                if values["email"].is_empty() {
                    errors.insert("email".into(), "Email address is required.".into());
                }
                if values["password"].is_empty() {
                    errors.insert("password".into(), "Password is required.".into());
                }
                errors
            })
            .on_submit(|_| {})
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_engine_starts_clean() {
        let form = FormEngine::new(required_both());
        assert!(form.errors().is_empty());
        assert!(form.touched().is_empty());
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(form.value("email").unwrap(), "");
    }

    #[test]
    fn test_set_value_on_untouched_field_stays_quiet() {
        let mut form = FormEngine::new(required_both());
        form.set_value("email", "a@b.com".to_string()).unwrap();
        // The field is invalid-to-valid but was never touched, so no error
        // entry exists either way.
        assert!(form.errors().is_empty());
        assert!(form.touched().is_empty());
    }

    #[test]
    fn test_set_value_on_touched_field_revalidates_it() {
        let mut form = FormEngine::new(required_both());
        form.blur("email").unwrap();
        assert_eq!(form.error("email"), Some("Email address is required."));

        form.set_value("email", "a@b.com".to_string()).unwrap();
        assert_eq!(form.error("email"), None);
    }

    #[test]
    fn test_blur_marks_touched_and_surfaces_error() {
        let mut form = FormEngine::new(required_both());
        form.blur("password").unwrap();
        assert!(form.is_touched("password"));
        assert_eq!(form.error("password"), Some("Password is required."));
        // Email was not the trigger, so it stays quiet.
        assert_eq!(form.error("email"), None);
    }

    #[test]
    fn test_blur_is_idempotent_for_touched() {
        let mut form = FormEngine::new(required_both());
        form.blur("email").unwrap();
        form.blur("email").unwrap();
        assert_eq!(form.touched().len(), 1);
    }

    #[test]
    fn test_unknown_field_fails_loudly() {
        let mut form = FormEngine::new(required_both());
        let err = form.set_value("nickname", String::new()).unwrap_err();
        assert!(matches!(err, FormFlowError::UnknownField { .. }));
        let err = form.blur("nickname").unwrap_err();
        assert!(matches!(err, FormFlowError::UnknownField { .. }));
    }

    #[test]
    fn test_unknown_field_does_not_mutate_state() {
        let mut form = FormEngine::new(required_both());
        let before = form.snapshot();
        let _ = form.set_value("nickname", "x".to_string());
        assert_eq!(form.snapshot(), before);
    }

    #[test]
    fn test_submit_gate_blocks_and_touches_all() {
        let mut form = FormEngine::new(required_both());
        form.submit();
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(form.errors().len(), 2);
        assert!(form.is_touched("email"));
        assert!(form.is_touched("password"));
    }

    #[test]
    fn test_submit_gate_passes_when_valid() {
        let mut form = FormEngine::new(required_both());
        form.set_value("email", "a@b.com".to_string()).unwrap();
        form.set_value("password", "secret1".to_string()).unwrap();
        form.submit();
        assert_eq!(form.status(), SubmitStatus::Submitting);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_validate_entries_for_undeclared_fields_are_dropped() {
        // A misbehaving validate function may key errors by names that
        // were never declared; the engine keeps its own invariant.
        let config = FormConfig::builder()
            .field("email", String::new())
            .validate(|_| {
                let mut errors = FieldErrors::new();
                errors.insert("ghost".into(), "not a field".into());
                errors
            })
            .on_submit(|_| {})
            .build()
            .unwrap();
        let mut form = FormEngine::new(config);
        form.submit();
        assert!(form.errors().is_empty());
        assert_eq!(form.status(), SubmitStatus::Submitting);
    }

    #[test]
    fn test_set_submitting_round_trip() {
        let mut form = FormEngine::new(required_both());
        form.set_value("email", "a@b.com".to_string()).unwrap();
        form.set_value("password", "secret1".to_string()).unwrap();
        form.submit();
        assert!(form.is_submitting());
        form.set_submitting(false);
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_reset_restores_initial_snapshot() {
        let mut form = FormEngine::new(required_both());
        let pristine = form.snapshot();

        form.set_value("email", "a@b.com".to_string()).unwrap();
        form.blur("password").unwrap();
        form.submit();
        form.reset();

        assert_eq!(form.snapshot(), pristine);
    }

    #[test]
    fn test_context_shape() {
        let mut form = FormEngine::new(required_both());
        form.blur("email").unwrap();
        let context = form.context();
        assert_eq!(context["is_valid"], serde_json::json!(false));
        assert_eq!(context["status"], serde_json::json!("idle"));
        assert_eq!(context["touched"], serde_json::json!(["email"]));
        assert_eq!(
            context["errors"]["email"],
            serde_json::json!("Email address is required.")
        );
    }
}

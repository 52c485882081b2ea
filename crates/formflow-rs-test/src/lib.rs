//! # formflow-rs-test
//!
//! Test utilities for exercising form engines: a recording submit backend
//! for asserting on gate behavior, and scripted event sequences for
//! driving an engine through realistic interactions without a UI.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use formflow_rs_core::error::FormFlowResult;
use formflow_rs_engine::FormEngine;

/// A submit callback that records every invocation.
///
/// Clones share the same recording, so keep one handle for assertions and
/// hand [`callback`](Self::callback) to the config builder.
///
/// # Examples
///
/// ```
/// use formflow_rs_engine::FormConfig;
/// use formflow_rs_engine::FormEngine;
/// use formflow_rs_core::error::FieldErrors;
/// use formflow_rs_test::RecordingSubmit;
///
/// let recording = RecordingSubmit::new();
/// let config = FormConfig::builder()
///     .field("email", "a@b.com".to_string())
///     .validate(|_| FieldErrors::new())
///     .on_submit(recording.callback())
///     .build()
///     .unwrap();
///
/// let mut form = FormEngine::new(config);
/// form.submit();
/// assert_eq!(recording.call_count(), 1);
/// assert_eq!(recording.last_call().unwrap()["email"], "a@b.com");
/// ```
pub struct RecordingSubmit<V> {
    calls: Arc<Mutex<Vec<HashMap<String, V>>>>,
}

impl<V> Clone for RecordingSubmit<V> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<V> Default for RecordingSubmit<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RecordingSubmit<V> {
    /// Creates a recorder with no calls.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns the number of times the callback has been invoked.
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("recording lock poisoned").len()
    }

    /// Returns `true` if the callback was invoked at least once.
    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }
}

impl<V: Clone> RecordingSubmit<V> {
    /// Returns all recorded invocations, oldest first.
    pub fn calls(&self) -> Vec<HashMap<String, V>> {
        self.calls.lock().expect("recording lock poisoned").clone()
    }

    /// Returns the most recent invocation's values, if any.
    pub fn last_call(&self) -> Option<HashMap<String, V>> {
        self.calls
            .lock()
            .expect("recording lock poisoned")
            .last()
            .cloned()
    }
}

impl<V: Clone + Send + 'static> RecordingSubmit<V> {
    /// Builds the callback to hand to a config builder's `on_submit`.
    pub fn callback(&self) -> impl Fn(&HashMap<String, V>) + Send + Sync + 'static {
        let calls = Arc::clone(&self.calls);
        move |values: &HashMap<String, V>| {
            calls
                .lock()
                .expect("recording lock poisoned")
                .push(values.clone());
        }
    }
}

/// One step of a scripted form interaction.
#[derive(Clone, Debug)]
pub enum FormEvent<V> {
    /// A value change for one field.
    Change {
        /// The field being edited.
        field: String,
        /// The replacement value.
        value: V,
    },
    /// A blur leaving one field.
    Blur {
        /// The field being left.
        field: String,
    },
    /// A submit attempt.
    Submit,
    /// The caller's completion signal.
    SetSubmitting(bool),
    /// A reset to the initial state.
    Reset,
}

impl<V> FormEvent<V> {
    /// Shorthand for a change event.
    pub fn change(field: impl Into<String>, value: V) -> Self {
        Self::Change {
            field: field.into(),
            value,
        }
    }

    /// Shorthand for a blur event.
    pub fn blur(field: impl Into<String>) -> Self {
        Self::Blur {
            field: field.into(),
        }
    }
}

/// Applies a scripted event sequence to an engine, in order.
///
/// Stops at the first failing operation (an unknown field reference) and
/// propagates its error; events already applied stay applied, matching how
/// a real caller would observe the failure.
pub fn drive<V: Clone + 'static>(
    engine: &mut FormEngine<V>,
    events: impl IntoIterator<Item = FormEvent<V>>,
) -> FormFlowResult<()> {
    for event in events {
        match event {
            FormEvent::Change { field, value } => engine.set_value(&field, value)?,
            FormEvent::Blur { field } => engine.blur(&field)?,
            FormEvent::Submit => engine.submit(),
            FormEvent::SetSubmitting(submitting) => engine.set_submitting(submitting),
            FormEvent::Reset => engine.reset(),
        }
    }
    Ok(())
}

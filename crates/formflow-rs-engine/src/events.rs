//! Per-instance lifecycle signals.
//!
//! Every engine carries its own [`FormSignals`] so rendering layers, audit
//! logs, and tests can observe mutations without polling. Signals fire
//! after the engine's state has fully settled for the operation, and
//! dispatch is synchronous, so a receiver always sees consistent state.

use formflow_rs_core::error::FieldErrors;
use formflow_rs_signals::Signal;

use crate::state::FormSnapshot;

/// The signals one engine instance emits.
pub struct FormSignals<V: 'static> {
    /// Fired after every mutating operation, with the settled snapshot.
    pub state_changed: Signal<FormSnapshot<V>>,
    /// Fired when a submit attempt passes the gate, before the submit
    /// callback runs.
    pub submit_started: Signal<FormSnapshot<V>>,
    /// Fired when a submit attempt is blocked, with the freshly computed
    /// error map.
    pub submit_blocked: Signal<FieldErrors>,
}

impl<V: 'static> FormSignals<V> {
    /// Creates a signal set with no connected receivers.
    pub fn new() -> Self {
        Self {
            state_changed: Signal::new(),
            submit_started: Signal::new(),
            submit_blocked: Signal::new(),
        }
    }
}

impl<V: 'static> Default for FormSignals<V> {
    fn default() -> Self {
        Self::new()
    }
}

//! # formflow-rs-signals
//!
//! Signal dispatcher for the formflow-rs engine. Provides a decoupled
//! observer mechanism so rendering layers, audit logs, and tests can react
//! to form lifecycle events without the engine knowing who is listening.
//! The engine exposes per-instance signals built on [`Signal`]; the global
//! [`SIGNALS`] registry holds named application-wide signals for
//! cross-cutting concerns.
//!
//! ## Usage
//!
//! ```
//! use formflow_rs_signals::Signal;
//! use std::sync::Arc;
//!
//! struct SubmitAccepted;
//!
//! let signal: Signal<SubmitAccepted> = Signal::new();
//!
//! signal.connect("audit", Arc::new(|_event: &SubmitAccepted| {
//!     println!("a form passed its submission gate");
//!     None
//! }));
//!
//! let results = signal.send(&SubmitAccepted);
//! assert_eq!(results.len(), 1);
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

/// The type signature for a signal receiver callback.
///
/// Receivers accept a reference to the signal payload and may optionally
/// return a boxed value to the sender. Receivers must be `Send + Sync` so
/// that signals can be dispatched from any thread.
pub type SignalReceiver<T> = Arc<dyn Fn(&T) -> Option<Box<dyn Any + Send>> + Send + Sync>;

/// A signal that can be connected to and dispatched.
///
/// Each signal carries a payload type `T`. Receivers are called in the
/// order they were connected; dispatch is synchronous and completes before
/// `send` returns, so observers always see state the sender has already
/// settled.
///
/// # Examples
///
/// ```
/// use formflow_rs_signals::Signal;
/// use std::sync::Arc;
///
/// let signal: Signal<String> = Signal::new();
///
/// signal.connect("logger", Arc::new(|field: &String| {
///     println!("field changed: {field}");
///     None
/// }));
///
/// signal.send(&"email".to_string());
/// ```
pub struct Signal<T: 'static> {
    receivers: RwLock<Vec<(String, SignalReceiver<T>)>>,
}

impl<T: 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Signal<T> {
    /// Creates a new signal with no connected receivers.
    pub fn new() -> Self {
        Self {
            receivers: RwLock::new(Vec::new()),
        }
    }

    /// Connects a receiver to this signal.
    ///
    /// The `receiver_id` identifies the receiver for later disconnection.
    /// If a receiver with the same ID is already connected, it is replaced
    /// in place, keeping its position in the dispatch order.
    pub fn connect(&self, receiver_id: impl Into<String>, callback: SignalReceiver<T>) {
        let id = receiver_id.into();
        let mut receivers = self.receivers.write().expect("signal lock poisoned");

        if let Some(entry) = receivers.iter_mut().find(|(rid, _)| *rid == id) {
            entry.1 = callback;
        } else {
            receivers.push((id, callback));
        }
    }

    /// Disconnects the receiver with the given ID.
    ///
    /// Returns `true` if a receiver was found and removed.
    pub fn disconnect(&self, receiver_id: &str) -> bool {
        let mut receivers = self.receivers.write().expect("signal lock poisoned");
        let len_before = receivers.len();
        receivers.retain(|(id, _)| id != receiver_id);
        receivers.len() < len_before
    }

    /// Sends the signal to all connected receivers.
    ///
    /// Receivers are called in connection order. Returns a vector of the
    /// return values from each receiver.
    pub fn send(&self, payload: &T) -> Vec<Option<Box<dyn Any + Send>>> {
        let receivers = self.receivers.read().expect("signal lock poisoned");
        receivers
            .iter()
            .map(|(_, callback)| callback(payload))
            .collect()
    }

    /// Returns the number of connected receivers.
    pub fn receiver_count(&self) -> usize {
        self.receivers.read().expect("signal lock poisoned").len()
    }
}

// ── Global signal registry ───────────────────────────────────────────

/// A type-erased signal that can carry any payload.
pub type DynSignal = Signal<Box<dyn Any + Send + Sync>>;

/// Storage type for named signals.
type NamedSignalMap = RwLock<HashMap<String, Arc<DynSignal>>>;

/// A registry of named, type-erased signals shared across the process.
///
/// Form instances each carry their own typed signals; the registry is for
/// application-wide concerns that span instances, such as an audit trail of
/// every submission attempt regardless of which form produced it.
pub struct SignalRegistry {
    named: NamedSignalMap,
}

impl SignalRegistry {
    fn new() -> Self {
        Self {
            named: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the named signal, creating it if it does not exist.
    ///
    /// The same name always resolves to the same signal instance.
    pub fn get_or_create(&self, name: &str) -> Arc<DynSignal> {
        {
            let named = self.named.read().expect("signal registry lock poisoned");
            if let Some(signal) = named.get(name) {
                return Arc::clone(signal);
            }
        }

        let mut named = self.named.write().expect("signal registry lock poisoned");
        Arc::clone(
            named
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(Signal::new())),
        )
    }
}

/// The global signal registry instance.
///
/// # Examples
///
/// ```
/// use formflow_rs_signals::SIGNALS;
/// use std::any::Any;
/// use std::sync::Arc;
///
/// let audit = SIGNALS.get_or_create("form_audit");
/// audit.connect("log", Arc::new(|_: &Box<dyn Any + Send + Sync>| {
///     println!("form event observed");
///     None
/// }));
/// ```
pub static SIGNALS: Lazy<SignalRegistry> = Lazy::new(SignalRegistry::new);

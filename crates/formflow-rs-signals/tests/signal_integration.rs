//! Integration tests for the signal dispatch system.
//!
//! Tests cover: connect/send with payload data, payload filtering,
//! disconnect, dispatch ordering across many receivers, cross-thread
//! dispatch, receiver return values, and the named registry.

use std::any::Any;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use formflow_rs_signals::{Signal, SIGNALS};

// ═════════════════════════════════════════════════════════════════════
// 1. Signal connect and send: receiver sees the payload
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_signal_connect_and_send_receives_payload() {
    let signal: Signal<String> = Signal::new();
    let received = Arc::new(Mutex::new(String::new()));
    let received_clone = received.clone();

    signal.connect(
        "capture",
        Arc::new(move |field: &String| {
            *received_clone.lock().unwrap() = field.clone();
            None
        }),
    );

    signal.send(&"confirm_password".to_string());
    assert_eq!(*received.lock().unwrap(), "confirm_password");
}

// ═════════════════════════════════════════════════════════════════════
// 2. Receivers filter on payload content
// ═════════════════════════════════════════════════════════════════════

#[derive(Debug)]
struct FieldEvent {
    field: String,
}

#[test]
fn test_receivers_filter_on_payload() {
    let signal: Signal<FieldEvent> = Signal::new();
    let email_count = Arc::new(AtomicUsize::new(0));
    let password_count = Arc::new(AtomicUsize::new(0));

    let ec = email_count.clone();
    signal.connect(
        "email_listener",
        Arc::new(move |event: &FieldEvent| {
            if event.field == "email" {
                ec.fetch_add(1, Ordering::SeqCst);
            }
            None
        }),
    );

    let pc = password_count.clone();
    signal.connect(
        "password_listener",
        Arc::new(move |event: &FieldEvent| {
            if event.field == "password" {
                pc.fetch_add(1, Ordering::SeqCst);
            }
            None
        }),
    );

    signal.send(&FieldEvent {
        field: "email".to_string(),
    });
    signal.send(&FieldEvent {
        field: "email".to_string(),
    });
    signal.send(&FieldEvent {
        field: "password".to_string(),
    });

    assert_eq!(email_count.load(Ordering::SeqCst), 2);
    assert_eq!(password_count.load(Ordering::SeqCst), 1);
}

// ═════════════════════════════════════════════════════════════════════
// 3. Disconnect stops a receiver without disturbing the rest
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_disconnect_stops_receiver() {
    let signal: Signal<()> = Signal::new();
    let count = Arc::new(AtomicUsize::new(0));
    let c = count.clone();

    signal.connect(
        "counter",
        Arc::new(move |_: &()| {
            c.fetch_add(1, Ordering::SeqCst);
            None
        }),
    );

    signal.send(&());
    assert_eq!(count.load(Ordering::SeqCst), 1);

    let removed = signal.disconnect("counter");
    assert!(removed);
    assert_eq!(signal.receiver_count(), 0);

    signal.send(&());
    assert_eq!(count.load(Ordering::SeqCst), 1);

    assert!(!signal.disconnect("counter"));
}

// ═════════════════════════════════════════════════════════════════════
// 4. Receivers fire in connection order
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_receivers_fire_in_connection_order() {
    let signal: Signal<()> = Signal::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    for name in &["render", "audit", "metrics"] {
        let o = order.clone();
        let n = name.to_string();
        signal.connect(
            *name,
            Arc::new(move |_: &()| {
                o.lock().unwrap().push(n.clone());
                None
            }),
        );
    }

    assert_eq!(signal.receiver_count(), 3);
    signal.send(&());

    let recorded = order.lock().unwrap();
    assert_eq!(*recorded, vec!["render", "audit", "metrics"]);
}

// ═════════════════════════════════════════════════════════════════════
// 5. Dispatch works across threads
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_dispatch_from_another_thread() {
    let signal: Arc<Signal<u32>> = Arc::new(Signal::new());
    let total = Arc::new(AtomicUsize::new(0));

    let t = total.clone();
    signal.connect(
        "summer",
        Arc::new(move |n: &u32| {
            t.fetch_add(*n as usize, Ordering::SeqCst);
            None
        }),
    );

    let handles: Vec<_> = (1..=4u32)
        .map(|n| {
            let s = Arc::clone(&signal);
            std::thread::spawn(move || {
                s.send(&n);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(total.load(Ordering::SeqCst), 1 + 2 + 3 + 4);
}

// ═════════════════════════════════════════════════════════════════════
// 6. Receiver return values come back in order
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_receiver_return_values_in_order() {
    let signal: Signal<i32> = Signal::new();

    signal.connect(
        "doubler",
        Arc::new(|val: &i32| Some(Box::new(val * 2) as Box<dyn Any + Send>)),
    );
    signal.connect(
        "adder",
        Arc::new(|val: &i32| Some(Box::new(val + 10) as Box<dyn Any + Send>)),
    );
    signal.connect("silent", Arc::new(|_: &i32| None));

    let results = signal.send(&5);
    assert_eq!(results.len(), 3);

    let doubled = results[0].as_ref().unwrap().downcast_ref::<i32>().unwrap();
    assert_eq!(*doubled, 10);

    let added = results[1].as_ref().unwrap().downcast_ref::<i32>().unwrap();
    assert_eq!(*added, 15);

    assert!(results[2].is_none());
}

// ═════════════════════════════════════════════════════════════════════
// 7. Named registry shares one signal per name
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_registry_shares_signal_per_name() {
    let count = Arc::new(AtomicUsize::new(0));
    let c = count.clone();

    let handler_id = "integration_audit_handler";
    let audit = SIGNALS.get_or_create("integration_form_audit");
    audit.connect(
        handler_id,
        Arc::new(move |_: &Box<dyn Any + Send + Sync>| {
            c.fetch_add(1, Ordering::SeqCst);
            None
        }),
    );

    // A second lookup under the same name dispatches to the same receivers.
    let same = SIGNALS.get_or_create("integration_form_audit");
    same.send(&(Box::new("submit".to_string()) as Box<dyn Any + Send + Sync>));
    assert_eq!(count.load(Ordering::SeqCst), 1);

    // A different name is a different signal.
    let other = SIGNALS.get_or_create("integration_other_channel");
    other.send(&(Box::new(()) as Box<dyn Any + Send + Sync>));
    assert_eq!(count.load(Ordering::SeqCst), 1);

    // Cleanup
    audit.disconnect(handler_id);
}

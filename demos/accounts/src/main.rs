//! # formflow-rs Accounts Demo
//!
//! A scripted walkthrough of the four account forms the engine was built
//! for:
//!
//! - **Sign-up**: name, email, strong password, matching confirmation
//! - **Login**: username-or-email plus password, presence checks only
//! - **Password reset**: a single well-formed email
//! - **Profile edit**: pre-filled values revalidated on change
//!
//! ## Running
//!
//! ```bash
//! cargo run --package accounts-demo
//! ```
//!
//! Each section drives an engine through the same event sequence a UI
//! would produce (change, blur, submit, completion) and narrates the
//! resulting state. Submit callbacks only log; there is no network and no
//! persistence.

mod forms;

use std::any::Any;
use std::sync::Arc;

use formflow_rs_core::logging;
use formflow_rs_engine::{FieldErrors, FormEngine};
use formflow_rs_signals::SIGNALS;

fn main() {
    logging::setup_logging("info", true);

    // A named application-wide signal collects every accepted submission,
    // regardless of which form produced it.
    let audit = SIGNALS.get_or_create("accepted_submissions");
    audit.connect(
        "audit_log",
        Arc::new(|payload: &Box<dyn Any + Send + Sync>| {
            if let Some(source) = payload.downcast_ref::<String>() {
                tracing::info!("audit: accepted submission from {source}");
            }
            None
        }),
    );

    demonstrate_sign_up();
    demonstrate_login();
    demonstrate_password_reset();
    demonstrate_profile_edit();

    tracing::info!("Accounts demo complete!");
}

/// Logs the currently displayed error messages, sorted for stable output.
fn log_errors(errors: &FieldErrors) {
    let mut entries: Vec<_> = errors.iter().collect();
    entries.sort();
    for (field, message) in entries {
        tracing::info!("  {field}: {message}");
    }
}

fn report_audit(form_name: &str) {
    let audit = SIGNALS.get_or_create("accepted_submissions");
    audit.send(&(Box::new(form_name.to_string()) as Box<dyn Any + Send + Sync>));
}

/// Demonstrates the full sign-up lifecycle: a blocked submit surfacing
/// every message, field-by-field correction, a stale confirmation error,
/// and finally the gate passing.
fn demonstrate_sign_up() {
    let span = logging::form_span("sign_up");
    let _guard = span.enter();
    tracing::info!("--- Sign-up form ---");

    let mut form = forms::sign_up_form(|values| {
        tracing::info!("creating account for {}", values["email"]);
        report_audit("sign_up");
    })
    .expect("sign-up form configuration is complete");

    // Submitting the untouched form surfaces every message at once.
    form.submit();
    tracing::info!("blocked submit, {} field(s) invalid:", form.errors().len());
    log_errors(form.errors());

    // The user works through the fields.
    set(&mut form, "name", "Sarah Johnson");
    form.blur("name").expect("declared field");
    set(&mut form, "email", "sarah@example.com");
    form.blur("email").expect("declared field");
    set(&mut form, "password", "Secret1!");
    form.blur("password").expect("declared field");

    // A typo in the confirmation shows up on blur.
    set(&mut form, "confirm_password", "Secret1");
    form.blur("confirm_password").expect("declared field");
    tracing::info!(
        "confirmation error: {:?}",
        form.error("confirm_password")
    );

    // Fixing the touched field clears its message immediately.
    set(&mut form, "confirm_password", "Secret1!");
    tracing::info!(
        "confirmation error after fix: {:?}",
        form.error("confirm_password")
    );

    form.submit();
    tracing::info!("submitting = {}", form.is_submitting());

    // The caller's own (here: pretend) async work finishes.
    form.set_submitting(false);
    form.reset();
    tracing::info!("after reset: valid={}, touched={}", form.is_valid(), form.touched().len());
}

/// Demonstrates the login form, including a lifecycle signal receiver
/// that reacts to blocked submits.
fn demonstrate_login() {
    let span = logging::form_span("login");
    let _guard = span.enter();
    tracing::info!("--- Login form ---");

    let form_result = forms::login_form(|values| {
        tracing::info!("logging in {}", values["email"]);
        report_audit("login");
    });
    let mut form = form_result.expect("login form configuration is complete");

    form.signals().submit_blocked.connect(
        "blocked_logger",
        Arc::new(|errors: &FieldErrors| {
            tracing::info!("login blocked with {} error(s)", errors.len());
            None
        }),
    );

    // A username (not an email) is acceptable for the identifier field.
    set(&mut form, "email", "sjohnson");
    form.submit(); // password still missing
    log_errors(form.errors());

    set(&mut form, "password", "Secret1!");
    form.submit();
    tracing::info!("submitting = {}", form.is_submitting());
    form.set_submitting(false);
}

/// Demonstrates the password-reset form and the rendering context export.
fn demonstrate_password_reset() {
    let span = logging::form_span("password_reset");
    let _guard = span.enter();
    tracing::info!("--- Password-reset form ---");

    let mut form = forms::password_reset_form(|values| {
        tracing::info!("sending reset instructions to {}", values["email"]);
        report_audit("password_reset");
    })
    .expect("password-reset form configuration is complete");

    set(&mut form, "email", "not-an-email");
    form.blur("email").expect("declared field");
    tracing::info!("context for the template layer: {}", form.context());

    set(&mut form, "email", "sarah@example.com");
    form.submit();
    form.set_submitting(false);
}

/// Demonstrates profile editing over pre-filled values.
fn demonstrate_profile_edit() {
    let span = logging::form_span("profile_edit");
    let _guard = span.enter();
    tracing::info!("--- Profile-edit form ---");

    let mut form = forms::profile_form("Sarah Johnson", "sarah@example.com", |values| {
        tracing::info!("saving profile for {}", values["name"]);
        report_audit("profile_edit");
    })
    .expect("profile form configuration is complete");

    // Breaking the email shows up once the field is touched.
    set(&mut form, "email", "sarah@broken");
    form.blur("email").expect("declared field");
    log_errors(form.errors());

    set(&mut form, "email", "sarah.johnson@example.com");
    form.submit();
    tracing::info!("submitting = {}", form.is_submitting());
    form.set_submitting(false);
}

/// Sets a declared field's value, panicking on a typo in the demo script.
fn set(form: &mut FormEngine<String>, field: &str, value: &str) {
    form.set_value(field, value.to_string()).expect("declared field");
}

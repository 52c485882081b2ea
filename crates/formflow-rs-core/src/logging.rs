//! Logging integration for the formflow-rs workspace.
//!
//! Provides a helper for configuring [`tracing`]-based logging in binaries
//! that embed the engine, and for creating per-form spans so log entries
//! emitted while handling one form's events can be told apart.

/// Sets up the global tracing subscriber.
///
/// The `log_level` string is an env-filter directive (e.g. "debug", "info",
/// "formflow_rs_engine=trace"). With `debug` set a pretty, human-readable
/// format is used; otherwise a structured JSON format is used. Setup is a
/// no-op if a subscriber was already installed.
pub fn setup_logging(log_level: &str, debug: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for one form instance.
///
/// Enter this span while routing a form's events so that all log entries
/// emitted during handling carry the form name.
///
/// # Examples
///
/// ```
/// use formflow_rs_core::logging::form_span;
///
/// let span = form_span("sign_up");
/// let _guard = span.enter();
/// tracing::info!("handling field change");
/// ```
pub fn form_span(form_name: &str) -> tracing::Span {
    tracing::info_span!("form", name = form_name)
}

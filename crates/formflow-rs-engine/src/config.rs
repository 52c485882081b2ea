//! One-time engine configuration.
//!
//! A [`FormConfig`] is supplied once at engine creation and is immutable
//! for the instance's life: the initial values fix the field set, the
//! validate function defines what "invalid" means, and the submit callback
//! is the single side-effecting hook behind the submission gate.

use std::collections::HashMap;
use std::sync::Arc;

use formflow_rs_core::error::{FieldErrors, FormFlowError, FormFlowResult};
use formflow_rs_validators::RuleSet;

/// The whole-form validate function.
///
/// Must be pure, deterministic, and synchronous. Returns entries only for
/// invalid fields; a field absent from the result is currently valid.
pub type ValidateFn<V> = Arc<dyn Fn(&HashMap<String, V>) -> FieldErrors + Send + Sync>;

/// The submit callback, invoked synchronously with the current values once
/// the submission gate has passed. It may start asynchronous work of its
/// own; the engine does not await it.
pub type SubmitFn<V> = Arc<dyn Fn(&HashMap<String, V>) + Send + Sync>;

/// Immutable configuration for one engine instance.
pub struct FormConfig<V> {
    pub(crate) initial_values: HashMap<String, V>,
    pub(crate) validate: ValidateFn<V>,
    pub(crate) on_submit: SubmitFn<V>,
}

impl<V> FormConfig<V> {
    /// Starts building a configuration.
    pub fn builder() -> FormConfigBuilder<V> {
        FormConfigBuilder::new()
    }
}

/// Builder for [`FormConfig`].
///
/// # Examples
///
/// ```
/// use formflow_rs_engine::FormConfig;
/// use formflow_rs_core::error::FieldErrors;
///
/// let config = FormConfig::builder()
///     .field("email", String::new())
///     .field("password", String::new())
///     .validate(|values| {
///         let mut errors = FieldErrors::new();
///         if values["email"].is_empty() {
///             errors.insert("email".into(), "Email address is required.".into());
///         }
///         errors
///     })
///     .on_submit(|values| {
///         println!("submitting {} fields", values.len());
///     })
///     .build()
///     .unwrap();
/// # let _ = config;
/// ```
pub struct FormConfigBuilder<V> {
    initial_values: HashMap<String, V>,
    validate: Option<ValidateFn<V>>,
    on_submit: Option<SubmitFn<V>>,
}

impl<V> Default for FormConfigBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FormConfigBuilder<V> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            initial_values: HashMap::new(),
            validate: None,
            on_submit: None,
        }
    }

    /// Declares a field with its initial value. The set of declared fields
    /// is fixed once the engine is created.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, initial: V) -> Self {
        self.initial_values.insert(name.into(), initial);
        self
    }

    /// Replaces all declared fields with the given map of initial values.
    #[must_use]
    pub fn initial_values(mut self, values: HashMap<String, V>) -> Self {
        self.initial_values = values;
        self
    }

    /// Sets the whole-form validate function.
    #[must_use]
    pub fn validate(
        mut self,
        validate: impl Fn(&HashMap<String, V>) -> FieldErrors + Send + Sync + 'static,
    ) -> Self {
        self.validate = Some(Arc::new(validate));
        self
    }

    /// Sets the submit callback.
    #[must_use]
    pub fn on_submit(
        mut self,
        on_submit: impl Fn(&HashMap<String, V>) + Send + Sync + 'static,
    ) -> Self {
        self.on_submit = Some(Arc::new(on_submit));
        self
    }

    /// Finishes the build.
    ///
    /// Fails with [`FormFlowError::ImproperlyConfigured`] when the validate
    /// function or the submit callback is missing.
    pub fn build(self) -> FormFlowResult<FormConfig<V>> {
        let validate = self.validate.ok_or_else(|| {
            FormFlowError::ImproperlyConfigured("a validate function is required".into())
        })?;
        let on_submit = self.on_submit.ok_or_else(|| {
            FormFlowError::ImproperlyConfigured("a submit callback is required".into())
        })?;
        Ok(FormConfig {
            initial_values: self.initial_values,
            validate,
            on_submit,
        })
    }
}

impl FormConfigBuilder<String> {
    /// Sets the validate function from a declarative [`RuleSet`].
    #[must_use]
    pub fn rules(self, rules: RuleSet) -> Self {
        self.validate(move |values| rules.validate(values))
    }
}

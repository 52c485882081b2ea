//! Composable per-field rule chains.
//!
//! A [`RuleSet`] turns declarative per-field validator chains into the
//! whole-form validate shape the engine consumes: a pure function from the
//! current values to a [`FieldErrors`] map. Within one field's chain the
//! first failing rule wins and later rules are not evaluated, so a field
//! surfaces one message at a time, in the order its rules were declared.

use std::collections::HashMap;
use std::fmt;

use formflow_rs_core::error::FieldErrors;

use crate::Validator;

/// One link in a field's chain: either a value check or a cross-field
/// equality requirement.
enum Rule {
    Check(Box<dyn Validator>),
    MatchesField { other: String, message: String },
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Check(validator) => f.debug_tuple("Check").field(&validator.name()).finish(),
            Self::MatchesField { other, .. } => {
                f.debug_tuple("MatchesField").field(other).finish()
            }
        }
    }
}

/// The ordered rule chain for a single field.
///
/// Built with chained calls, evaluated first-failure-wins:
///
/// ```
/// use formflow_rs_validators::{FieldRules, MinLengthValidator, RequiredValidator};
///
/// let name_rules = FieldRules::new("name")
///     .check(RequiredValidator::new())
///     .message("required", "Your name is required.")
///     .check(MinLengthValidator::new(2).trimmed())
///     .message("min_length", "Name must be at least 2 characters.");
/// ```
#[derive(Debug)]
pub struct FieldRules {
    name: String,
    rules: Vec<Rule>,
    messages: HashMap<String, String>,
}

impl FieldRules {
    /// Creates an empty rule chain for the named field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
            messages: HashMap::new(),
        }
    }

    /// Appends a validator to the chain.
    #[must_use]
    pub fn check(mut self, validator: impl Validator + 'static) -> Self {
        self.rules.push(Rule::Check(Box::new(validator)));
        self
    }

    /// Appends a cross-field equality requirement: this field's value must
    /// equal `other`'s current value.
    #[must_use]
    pub fn matches_field(mut self, other: impl Into<String>, message: impl Into<String>) -> Self {
        self.rules.push(Rule::MatchesField {
            other: other.into(),
            message: message.into(),
        });
        self
    }

    /// Overrides the surfaced message for failures with the given code.
    #[must_use]
    pub fn message(mut self, code: impl Into<String>, message: impl Into<String>) -> Self {
        self.messages.insert(code.into(), message.into());
        self
    }

    /// Returns the field name this chain applies to.
    pub fn field_name(&self) -> &str {
        &self.name
    }

    /// Evaluates the chain against the form's values, returning the first
    /// failure's message.
    fn first_failure(&self, values: &HashMap<String, String>) -> Option<String> {
        let value = values.get(&self.name).map_or("", String::as_str);
        for rule in &self.rules {
            match rule {
                Rule::Check(validator) => {
                    if let Err(error) = validator.validate(value) {
                        let message = self
                            .messages
                            .get(&error.code)
                            .cloned()
                            .unwrap_or(error.message);
                        return Some(message);
                    }
                }
                Rule::MatchesField { other, message } => {
                    let other_value = values.get(other).map_or("", String::as_str);
                    if value != other_value {
                        return Some(message.clone());
                    }
                }
            }
        }
        None
    }
}

/// A whole-form collection of per-field rule chains.
///
/// `validate` is pure, deterministic, and synchronous, which makes a rule
/// set directly usable as a form engine's validate function.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use formflow_rs_validators::{EmailValidator, FieldRules, RequiredValidator, RuleSet};
///
/// let rules = RuleSet::new(vec![
///     FieldRules::new("email")
///         .check(RequiredValidator::new())
///         .message("required", "Email address is required.")
///         .check(EmailValidator::new()),
/// ]);
///
/// let mut values = HashMap::new();
/// values.insert("email".to_string(), "not-an-email".to_string());
/// let errors = rules.validate(&values);
/// assert_eq!(errors["email"], "Please enter a valid email address.");
/// ```
#[derive(Debug)]
pub struct RuleSet {
    fields: Vec<FieldRules>,
}

impl RuleSet {
    /// Creates a rule set from per-field chains.
    pub fn new(fields: Vec<FieldRules>) -> Self {
        Self { fields }
    }

    /// Evaluates every field's chain against the given values.
    ///
    /// Returns entries only for fields whose chain failed; each entry is
    /// that chain's first failure. A field with no value yet is validated
    /// as an empty string.
    pub fn validate(&self, values: &HashMap<String, String>) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in &self.fields {
            if let Some(message) = field.first_failure(values) {
                errors.insert(field.name.clone(), message);
            }
        }
        errors
    }
}

//! # formflow-rs-validators
//!
//! Validation rules for the formflow-rs engine. A [`Validator`] checks a
//! single constraint on one field's text value; a [`RuleSet`] composes
//! per-field validator chains into the whole-form validate function the
//! engine consumes.
//!
//! Except for [`RequiredValidator`], validators treat an empty value as out
//! of scope and pass it: emptiness is the required rule's concern, so
//! optional fields do not accumulate spurious format errors.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use formflow_rs_core::error::{FormFlowError, FormFlowResult, ValidationError};

mod rules;

pub use rules::{FieldRules, RuleSet};

/// A trait for validating a single field's text value.
///
/// Validators are attached to [`FieldRules`] chains and called in
/// declaration order during rule-set evaluation. Each validator checks one
/// constraint and returns a [`ValidationError`] carrying a default message
/// and a code; rule sets may override the message per code.
///
/// # Examples
///
/// ```
/// use formflow_rs_validators::{MinLengthValidator, Validator};
///
/// let v = MinLengthValidator::new(8);
/// assert!(v.validate("longenough").is_ok());
/// assert!(v.validate("short").is_err());
/// ```
pub trait Validator: Send + Sync + fmt::Debug {
    /// Validates the given value, returning an error if invalid.
    fn validate(&self, value: &str) -> Result<(), ValidationError>;

    /// Returns a human-readable name for this validator.
    fn name(&self) -> &str;
}

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Validates that a value is not blank (empty or whitespace-only).
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredValidator;

impl RequiredValidator {
    /// Creates a new `RequiredValidator`.
    pub const fn new() -> Self {
        Self
    }
}

impl Validator for RequiredValidator {
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("This field is required.", "required"));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "RequiredValidator"
    }
}

/// Validates that a value meets a minimum length requirement.
///
/// Length is counted in characters. With [`trimmed`](Self::trimmed) set,
/// leading and trailing whitespace is ignored when counting.
#[derive(Debug, Clone, Copy)]
pub struct MinLengthValidator {
    /// The minimum required length.
    pub min_length: usize,
    trim: bool,
}

impl MinLengthValidator {
    /// Creates a new `MinLengthValidator` with the given minimum length.
    pub const fn new(min_length: usize) -> Self {
        Self {
            min_length,
            trim: false,
        }
    }

    /// Counts length after stripping leading/trailing whitespace.
    #[must_use]
    pub const fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Ok(());
        }
        let counted = if self.trim { value.trim() } else { value };
        let length = counted.chars().count();
        if length < self.min_length {
            return Err(ValidationError::new(
                format!(
                    "Ensure this value has at least {} characters (it has {length}).",
                    self.min_length
                ),
                "min_length",
            )
            .with_param("min", self.min_length.to_string()));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "MinLengthValidator"
    }
}

/// Validates that a value does not exceed a maximum length.
#[derive(Debug, Clone, Copy)]
pub struct MaxLengthValidator {
    /// The maximum allowed length.
    pub max_length: usize,
}

impl MaxLengthValidator {
    /// Creates a new `MaxLengthValidator` with the given maximum length.
    pub const fn new(max_length: usize) -> Self {
        Self { max_length }
    }
}

impl Validator for MaxLengthValidator {
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        let length = value.chars().count();
        if length > self.max_length {
            return Err(ValidationError::new(
                format!(
                    "Ensure this value has at most {} characters (it has {length}).",
                    self.max_length
                ),
                "max_length",
            )
            .with_param("max", self.max_length.to_string()));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "MaxLengthValidator"
    }
}

/// Validates that a value looks like an email address.
///
/// The pattern accepts one `@` separating non-whitespace local and domain
/// parts, with at least one dot in the domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl EmailValidator {
    /// Creates a new `EmailValidator`.
    pub const fn new() -> Self {
        Self
    }
}

impl Validator for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Ok(());
        }
        if !EMAIL_PATTERN.is_match(value) {
            return Err(ValidationError::new(
                "Please enter a valid email address.",
                "invalid",
            ));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "EmailValidator"
    }
}

/// Validates password character-class requirements.
///
/// Checks run in a fixed order and the first missing class wins: lowercase
/// letter, uppercase letter, digit, special character (anything outside
/// ASCII alphanumerics). Length requirements are a separate concern; chain
/// a [`MinLengthValidator`] before this one.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordStrengthValidator;

impl PasswordStrengthValidator {
    /// Creates a new `PasswordStrengthValidator`.
    pub const fn new() -> Self {
        Self
    }
}

impl Validator for PasswordStrengthValidator {
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Ok(());
        }
        if !value.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(ValidationError::new(
                "Password must contain a lowercase letter.",
                "password_lowercase",
            ));
        }
        if !value.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(ValidationError::new(
                "Password must contain an uppercase letter.",
                "password_uppercase",
            ));
        }
        if !value.chars().any(|c| c.is_ascii_digit()) {
            return Err(ValidationError::new(
                "Password must contain a number.",
                "password_digit",
            ));
        }
        if !value.chars().any(|c| !c.is_ascii_alphanumeric()) {
            return Err(ValidationError::new(
                "Password must contain a special character.",
                "password_special",
            ));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "PasswordStrengthValidator"
    }
}

/// Validates a value against an arbitrary regular expression.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    regex: Regex,
}

impl RegexValidator {
    /// Creates a new `RegexValidator` from a pattern.
    ///
    /// An invalid pattern is an [`FormFlowError::ImproperlyConfigured`]
    /// error.
    pub fn new(pattern: &str) -> FormFlowResult<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| FormFlowError::ImproperlyConfigured(format!("invalid pattern: {e}")))?;
        Ok(Self { regex })
    }
}

impl Validator for RegexValidator {
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Ok(());
        }
        if !self.regex.is_match(value) {
            return Err(ValidationError::new("Enter a valid value.", "invalid"));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "RegexValidator"
    }
}

//! Form definitions for the account flows.
//!
//! Each screen of the original application gets a constructor pairing an
//! engine with the rule set that screen enforced: sign-up, login, password
//! reset, and profile edit. The submit callback is injected so the binary
//! can log and tests can record.

use std::collections::HashMap;

use formflow_rs_core::error::FormFlowResult;
use formflow_rs_engine::{FormConfig, FormEngine};
use formflow_rs_validators::{
    EmailValidator, FieldRules, MinLengthValidator, PasswordStrengthValidator,
    RequiredValidator, RuleSet,
};

/// Rules for the sign-up screen: name, email, a strong password, and a
/// matching confirmation.
pub fn sign_up_rules() -> RuleSet {
    RuleSet::new(vec![
        FieldRules::new("name")
            .check(RequiredValidator::new())
            .message("required", "Your name is required.")
            .check(MinLengthValidator::new(2).trimmed())
            .message("min_length", "Name must be at least 2 characters."),
        FieldRules::new("email")
            .check(RequiredValidator::new())
            .message("required", "Email address is required.")
            .check(EmailValidator::new()),
        FieldRules::new("password")
            .check(RequiredValidator::new())
            .message("required", "Password is required.")
            .check(MinLengthValidator::new(8))
            .message("min_length", "Password must be at least 8 characters.")
            .check(PasswordStrengthValidator::new()),
        FieldRules::new("confirm_password")
            .check(RequiredValidator::new())
            .message("required", "Please confirm your password.")
            .matches_field("password", "Passwords do not match."),
    ])
}

/// Rules for the login screen. The identifier field accepts a username or
/// an email address, so only presence is checked.
pub fn login_rules() -> RuleSet {
    RuleSet::new(vec![
        FieldRules::new("email")
            .check(RequiredValidator::new())
            .message("required", "Username or Email is required."),
        FieldRules::new("password")
            .check(RequiredValidator::new())
            .message("required", "Password is required."),
    ])
}

/// Rules for the password-reset screen: a single well-formed email.
pub fn password_reset_rules() -> RuleSet {
    RuleSet::new(vec![FieldRules::new("email")
        .check(RequiredValidator::new())
        .message("required", "Email address is required.")
        .check(EmailValidator::new())])
}

/// Rules for the profile-edit screen: same name and email constraints as
/// sign-up, applied to pre-filled values.
pub fn profile_rules() -> RuleSet {
    RuleSet::new(vec![
        FieldRules::new("name")
            .check(RequiredValidator::new())
            .message("required", "Your name is required.")
            .check(MinLengthValidator::new(2).trimmed())
            .message("min_length", "Name must be at least 2 characters."),
        FieldRules::new("email")
            .check(RequiredValidator::new())
            .message("required", "Email address is required.")
            .check(EmailValidator::new()),
    ])
}

/// Builds the sign-up form with blank initial values.
pub fn sign_up_form(
    on_submit: impl Fn(&HashMap<String, String>) + Send + Sync + 'static,
) -> FormFlowResult<FormEngine<String>> {
    let config = FormConfig::builder()
        .field("name", String::new())
        .field("email", String::new())
        .field("password", String::new())
        .field("confirm_password", String::new())
        .rules(sign_up_rules())
        .on_submit(on_submit)
        .build()?;
    Ok(FormEngine::new(config))
}

/// Builds the login form with blank initial values.
pub fn login_form(
    on_submit: impl Fn(&HashMap<String, String>) + Send + Sync + 'static,
) -> FormFlowResult<FormEngine<String>> {
    let config = FormConfig::builder()
        .field("email", String::new())
        .field("password", String::new())
        .rules(login_rules())
        .on_submit(on_submit)
        .build()?;
    Ok(FormEngine::new(config))
}

/// Builds the password-reset form with a blank email.
pub fn password_reset_form(
    on_submit: impl Fn(&HashMap<String, String>) + Send + Sync + 'static,
) -> FormFlowResult<FormEngine<String>> {
    let config = FormConfig::builder()
        .field("email", String::new())
        .rules(password_reset_rules())
        .on_submit(on_submit)
        .build()?;
    Ok(FormEngine::new(config))
}

/// Builds the profile-edit form, pre-filled with the current profile.
pub fn profile_form(
    name: &str,
    email: &str,
    on_submit: impl Fn(&HashMap<String, String>) + Send + Sync + 'static,
) -> FormFlowResult<FormEngine<String>> {
    let config = FormConfig::builder()
        .field("name", name.to_string())
        .field("email", email.to_string())
        .rules(profile_rules())
        .on_submit(on_submit)
        .build()?;
    Ok(FormEngine::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use formflow_rs_engine::SubmitStatus;
    use formflow_rs_test::{drive, FormEvent, RecordingSubmit};

    #[test]
    fn test_sign_up_rules_cover_each_field() {
        let mut values: HashMap<String, String> = HashMap::new();
        values.insert("name".into(), String::new());
        values.insert("email".into(), String::new());
        values.insert("password".into(), String::new());
        values.insert("confirm_password".into(), String::new());

        let errors = sign_up_rules().validate(&values);
        assert_eq!(errors["name"], "Your name is required.");
        assert_eq!(errors["email"], "Email address is required.");
        assert_eq!(errors["password"], "Password is required.");
        assert_eq!(errors["confirm_password"], "Please confirm your password.");
    }

    #[test]
    fn test_sign_up_password_ladder() {
        let mut values: HashMap<String, String> = HashMap::new();
        values.insert("password".into(), "short".into());
        let errors = sign_up_rules().validate(&values);
        assert_eq!(errors["password"], "Password must be at least 8 characters.");

        values.insert("password".into(), "alllowercase1!".into());
        let errors = sign_up_rules().validate(&values);
        assert_eq!(
            errors["password"],
            "Password must contain an uppercase letter."
        );

        values.insert("password".into(), "Secret1!".into());
        let errors = sign_up_rules().validate(&values);
        assert!(!errors.contains_key("password"));
    }

    #[test]
    fn test_sign_up_confirmation_must_match() {
        let mut values: HashMap<String, String> = HashMap::new();
        values.insert("password".into(), "Secret1!".into());
        values.insert("confirm_password".into(), "Secret2!".into());
        let errors = sign_up_rules().validate(&values);
        assert_eq!(errors["confirm_password"], "Passwords do not match.");
    }

    #[test]
    fn test_login_accepts_plain_usernames() {
        let mut values: HashMap<String, String> = HashMap::new();
        values.insert("email".into(), "sjohnson".into());
        values.insert("password".into(), "anything".into());
        assert!(login_rules().validate(&values).is_empty());
    }

    #[test]
    fn test_password_reset_requires_well_formed_email() {
        let mut values: HashMap<String, String> = HashMap::new();
        values.insert("email".into(), "not-an-email".into());
        let errors = password_reset_rules().validate(&values);
        assert_eq!(errors["email"], "Please enter a valid email address.");
    }

    #[test]
    fn test_sign_up_flow_end_to_end() {
        let recording = RecordingSubmit::new();
        let mut form = sign_up_form(recording.callback()).unwrap();

        // First submit with everything blank: blocked, nothing recorded.
        form.submit();
        assert_eq!(form.errors().len(), 4);
        assert!(!recording.was_called());

        drive(
            &mut form,
            vec![
                FormEvent::change("name", "Sarah Johnson".to_string()),
                FormEvent::change("email", "sarah@example.com".to_string()),
                FormEvent::change("password", "Secret1!".to_string()),
                FormEvent::change("confirm_password", "Secret1!".to_string()),
                FormEvent::Submit,
                FormEvent::SetSubmitting(false),
            ],
        )
        .unwrap();

        assert_eq!(recording.call_count(), 1);
        assert_eq!(recording.last_call().unwrap()["email"], "sarah@example.com");
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_profile_form_starts_valid_with_prefill() {
        let recording = RecordingSubmit::new();
        let mut form =
            profile_form("Sarah Johnson", "sarah@example.com", recording.callback()).unwrap();

        form.submit();
        assert!(form.errors().is_empty());
        assert_eq!(recording.call_count(), 1);
    }
}

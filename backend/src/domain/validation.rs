//! Context-sensitive validation engine.
//!
//! Validation is a pure function over (channel, input, policy table). Every
//! violated rule is reported; nothing short-circuits at the first failure.
//! The only exception is an unresolved channel, where no policy exists to
//! check field rules against — the engine then reports the password
//! violations plus a single channel-selection diagnostic and stops.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::policy::FormatRule;
use crate::domain::{Channel, ProfileField, UserCreationInput, UserSearchCriteria, policy_for};

/// Special characters accepted by the password policy.
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*";

/// Wire name of the channel signal header.
pub const DEVICE_HEADER: &str = "x-Device";

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Wire name of the offending field.
    pub field: &'static str,
    /// Human-readable explanation of the failure.
    pub message: String,
}

impl Violation {
    /// Build a violation for the named field.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a creation request against the policy selected by `channel`.
///
/// Returns the exhaustive violation list; an empty list means the input is
/// accepted.
///
/// # Examples
/// ```
/// use backend::domain::{Channel, UserCreationInput, validate_creation};
///
/// let input = UserCreationInput {
///     password: "Abcdef1!".into(),
///     first_name: Some("Ada".into()),
///     email: Some("ada@example.com".into()),
///     last_name: None,
///     middle_name: None,
///     date_of_birth: None,
///     passport_number: None,
///     place_of_birth: None,
///     phone_number: None,
///     registration_address: None,
///     residential_address: None,
/// };
/// assert!(validate_creation(Some(Channel::Mail), &input).is_empty());
/// ```
#[must_use]
pub fn validate_creation(channel: Option<Channel>, input: &UserCreationInput) -> Vec<Violation> {
    let mut violations = Vec::new();
    password_violations(&input.password, &mut violations);

    let Some(channel) = channel else {
        violations.push(Violation::new(
            ProfileField::FirstName.name(),
            format!("device channel is not specified; supply a valid '{DEVICE_HEADER}' header value"),
        ));
        return violations;
    };

    let policy = policy_for(channel);
    for field in policy.required() {
        if !input.is_populated(*field) {
            violations.push(Violation::new(
                field.name(),
                format!("{} is required for the '{channel}' channel", field.name()),
            ));
        }
    }

    for (field, rule) in policy.formats() {
        if let Some(value) = input.text_value(*field).filter(|value| !value.is_empty())
            && !rule.is_match(value)
        {
            violations.push(Violation::new(
                field.name(),
                format!("{} {}", field.name(), rule.expectation()),
            ));
        }
    }

    for field in ProfileField::ALL {
        if input.is_provided(field) && !policy.allows(field) {
            violations.push(Violation::new(
                field.name(),
                format!(
                    "field '{}' is not permitted for the '{channel}' channel",
                    field.name()
                ),
            ));
        }
    }

    violations
}

fn password_violations(password: &str, violations: &mut Vec<Violation>) {
    let field = ProfileField::Password.name();
    if password.is_empty() {
        violations.push(Violation::new(
            field,
            "password is required for every channel",
        ));
    }
    let checks: [(fn(char) -> bool, &str); 4] = [
        (
            char::is_uppercase,
            "password must contain at least one uppercase letter",
        ),
        (
            char::is_lowercase,
            "password must contain at least one lowercase letter",
        ),
        (
            |c| c.is_ascii_digit(),
            "password must contain at least one digit",
        ),
        (
            |c| PASSWORD_SPECIAL_CHARS.contains(c),
            "password must contain at least one special character (!@#$%^&*)",
        ),
    ];
    for (predicate, message) in checks {
        if !password.chars().any(predicate) {
            violations.push(Violation::new(field, message));
        }
    }
}

static SEARCH_NAME_RE: OnceLock<Regex> = OnceLock::new();
static SEARCH_DIGITS_RE: OnceLock<Regex> = OnceLock::new();

fn search_name_regex() -> &'static Regex {
    SEARCH_NAME_RE.get_or_init(|| {
        // Latin and Cyrillic letters only; length is unconstrained.
        Regex::new("^[a-zA-Zа-яА-ЯёЁ]*$")
            .unwrap_or_else(|error| panic!("search name regex failed to compile: {error}"))
    })
}

fn search_digits_regex() -> &'static Regex {
    SEARCH_DIGITS_RE.get_or_init(|| {
        Regex::new(r"^\d*$")
            .unwrap_or_else(|error| panic!("search digits regex failed to compile: {error}"))
    })
}

/// Validate search criteria before they reach the search service.
///
/// Enforces the at-least-one-predicate invariant and the per-predicate
/// character rules, reporting every violated rule.
///
/// # Examples
/// ```
/// use backend::domain::{UserSearchCriteria, validate_search};
///
/// let violations = validate_search(&UserSearchCriteria::default());
/// assert_eq!(violations.len(), 1);
/// assert_eq!(violations[0].field, "criteria");
/// ```
#[must_use]
pub fn validate_search(criteria: &UserSearchCriteria) -> Vec<Violation> {
    let mut violations = Vec::new();

    if criteria.is_empty() {
        violations.push(Violation::new(
            "criteria",
            "at least one search parameter must be specified",
        ));
    }

    let name_predicates = [
        (ProfileField::LastName.name(), criteria.last_name.as_deref()),
        (
            ProfileField::FirstName.name(),
            criteria.first_name.as_deref(),
        ),
        (
            ProfileField::MiddleName.name(),
            criteria.middle_name.as_deref(),
        ),
    ];
    for (field, value) in name_predicates {
        if let Some(value) = value.filter(|value| !value.is_empty())
            && !search_name_regex().is_match(value)
        {
            violations.push(Violation::new(
                field,
                format!("{field} contains invalid characters"),
            ));
        }
    }

    if let Some(value) = criteria.phone_number.as_deref().filter(|v| !v.is_empty())
        && !search_digits_regex().is_match(value)
    {
        violations.push(Violation::new(
            ProfileField::PhoneNumber.name(),
            "phoneNumber must contain only digits",
        ));
    }

    if let Some(value) = criteria.email.as_deref().filter(|v| !v.is_empty())
        && !FormatRule::Email.is_match(value)
    {
        violations.push(Violation::new(
            ProfileField::Email.name(),
            format!("email {}", FormatRule::Email.expectation()),
        ));
    }

    violations
}

#[cfg(test)]
mod tests;

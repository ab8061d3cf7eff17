//! Regression coverage for the validation engine.

use chrono::NaiveDate;
use rstest::rstest;

use super::*;

const STRONG_PASSWORD: &str = "Abcdef1!";

fn base_input(password: &str) -> UserCreationInput {
    UserCreationInput {
        password: password.into(),
        last_name: None,
        first_name: None,
        middle_name: None,
        date_of_birth: None,
        passport_number: None,
        place_of_birth: None,
        phone_number: None,
        email: None,
        registration_address: None,
        residential_address: None,
    }
}

fn mail_input() -> UserCreationInput {
    UserCreationInput {
        first_name: Some("Ada".into()),
        email: Some("a@b.com".into()),
        ..base_input(STRONG_PASSWORD)
    }
}

fn mobile_input() -> UserCreationInput {
    UserCreationInput {
        phone_number: Some("71234567890".into()),
        ..base_input(STRONG_PASSWORD)
    }
}

fn web_input() -> UserCreationInput {
    UserCreationInput {
        first_name: Some("John".into()),
        last_name: Some("Doe".into()),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1),
        passport_number: Some("1234 567890".into()),
        place_of_birth: Some("New York".into()),
        phone_number: Some("71234567890".into()),
        registration_address: Some("123 Main St".into()),
        ..base_input(STRONG_PASSWORD)
    }
}

fn fields_of(violations: &[Violation]) -> Vec<&'static str> {
    violations.iter().map(|v| v.field).collect()
}

#[rstest]
#[case(Channel::Mail, mail_input())]
#[case(Channel::Mobile, mobile_input())]
#[case(Channel::Web, web_input())]
fn conforming_input_yields_no_violations(#[case] channel: Channel, #[case] input: UserCreationInput) {
    assert_eq!(validate_creation(Some(channel), &input), Vec::new());
}

#[test]
fn missing_email_for_mail_is_reported() {
    let input = UserCreationInput {
        email: None,
        ..mail_input()
    };
    let violations = validate_creation(Some(Channel::Mail), &input);
    assert!(fields_of(&violations).contains(&"email"));
}

#[test]
fn empty_string_counts_as_missing_for_required_fields() {
    let input = UserCreationInput {
        email: Some(String::new()),
        ..mail_input()
    };
    let violations = validate_creation(Some(Channel::Mail), &input);
    // Required failure only: empty values are exempt from format rules.
    assert_eq!(fields_of(&violations), vec!["email"]);
    assert!(violations[0].message.contains("required"));
}

#[test]
fn extra_field_for_mail_is_rejected_by_name() {
    let input = UserCreationInput {
        phone_number: Some("71234567890".into()),
        ..mail_input()
    };
    let violations = validate_creation(Some(Channel::Mail), &input);
    assert_eq!(fields_of(&violations), vec!["phoneNumber"]);
    assert_eq!(
        violations[0].message,
        "field 'phoneNumber' is not permitted for the 'mail' channel"
    );
}

#[test]
fn extra_field_for_mobile_is_rejected_even_when_well_formed() {
    let input = UserCreationInput {
        email: Some("x@y.com".into()),
        ..mobile_input()
    };
    let violations = validate_creation(Some(Channel::Mobile), &input);
    assert_eq!(fields_of(&violations), vec!["email"]);
}

#[test]
fn residential_address_is_extra_on_every_channel() {
    for (channel, input) in [
        (Channel::Mail, mail_input()),
        (Channel::Mobile, mobile_input()),
        (Channel::Web, web_input()),
    ] {
        let with_extra = UserCreationInput {
            residential_address: Some("42 Elm St".into()),
            ..input
        };
        let violations = validate_creation(Some(channel), &with_extra);
        assert_eq!(
            fields_of(&violations),
            vec!["residentialAddress"],
            "channel {channel}"
        );
    }
}

#[test]
fn web_reports_every_missing_required_field() {
    let input = UserCreationInput {
        first_name: Some("John".into()),
        ..base_input(STRONG_PASSWORD)
    };
    let violations = validate_creation(Some(Channel::Web), &input);
    let fields = fields_of(&violations);
    for expected in [
        "lastName",
        "dateOfBirth",
        "passportNumber",
        "placeOfBirth",
        "phoneNumber",
        "registrationAddress",
    ] {
        assert!(fields.contains(&expected), "missing violation for {expected}");
    }
    assert!(!fields.contains(&"firstName"));
}

#[rstest]
#[case(Channel::Mobile, mobile_input())]
#[case(Channel::Web, web_input())]
fn malformed_phone_fails_format_rule(#[case] channel: Channel, #[case] input: UserCreationInput) {
    let malformed = UserCreationInput {
        phone_number: Some("81234567890".into()),
        ..input
    };
    let violations = validate_creation(Some(channel), &malformed);
    assert_eq!(fields_of(&violations), vec!["phoneNumber"]);
    assert!(violations[0].message.contains("7XXXXXXXXXX"));
}

#[test]
fn malformed_passport_fails_format_rule() {
    let input = UserCreationInput {
        passport_number: Some("1234567890".into()),
        ..web_input()
    };
    let violations = validate_creation(Some(Channel::Web), &input);
    assert_eq!(fields_of(&violations), vec!["passportNumber"]);
}

#[test]
fn unresolved_channel_reports_only_password_and_channel_violations() {
    let input = UserCreationInput {
        email: Some("x@y.com".into()),
        phone_number: Some("banana".into()),
        ..base_input("weak")
    };
    let violations = validate_creation(None, &input);
    // "weak" lacks uppercase, digit, and special character.
    let fields = fields_of(&violations);
    assert_eq!(fields, vec!["password", "password", "password", "firstName"]);
    assert!(
        violations
            .last()
            .is_some_and(|v| v.message.contains("x-Device"))
    );
}

#[rstest]
#[case("abcdef1!", "uppercase")]
#[case("ABCDEF1!", "lowercase")]
#[case("Abcdefg!", "digit")]
#[case("Abcdefg1", "special character")]
fn password_missing_one_class_yields_one_violation(
    #[case] password: &str,
    #[case] expected_fragment: &str,
) {
    for channel in [Channel::Mail, Channel::Mobile, Channel::Web] {
        let input = match channel {
            Channel::Mail => mail_input(),
            Channel::Mobile => mobile_input(),
            Channel::Web => web_input(),
        };
        let input = UserCreationInput {
            password: password.into(),
            ..input
        };
        let violations = validate_creation(Some(channel), &input);
        assert_eq!(violations.len(), 1, "channel {channel}");
        assert_eq!(violations[0].field, "password");
        assert!(
            violations[0].message.contains(expected_fragment),
            "channel {channel}: {}",
            violations[0].message
        );
    }
}

#[test]
fn empty_password_reports_requirement_and_every_class() {
    let violations = validate_creation(Some(Channel::Mobile), &mobile_input());
    assert!(violations.is_empty());

    let input = UserCreationInput {
        password: String::new(),
        ..mobile_input()
    };
    let violations = validate_creation(Some(Channel::Mobile), &input);
    assert_eq!(violations.len(), 5);
    assert!(violations.iter().all(|v| v.field == "password"));
}

mod search {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn empty_criteria_is_rejected_with_single_violation() {
        let violations = validate_search(&UserSearchCriteria::default());
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "at least one search parameter must be specified"
        );
    }

    #[test]
    fn identifier_alone_satisfies_the_predicate_invariant() {
        let criteria = UserSearchCriteria {
            user_id: Some(Uuid::nil()),
            ..UserSearchCriteria::default()
        };
        assert!(validate_search(&criteria).is_empty());
    }

    #[rstest]
    #[case("Jo", true)]
    #[case("Иванов", true)]
    #[case("O'Brien", false)]
    #[case("Doe42", false)]
    fn name_predicates_allow_letters_only(#[case] value: &str, #[case] valid: bool) {
        let criteria = UserSearchCriteria {
            last_name: Some(value.into()),
            ..UserSearchCriteria::default()
        };
        assert_eq!(validate_search(&criteria).is_empty(), valid);
    }

    #[rstest]
    #[case("7123", true)]
    #[case("7123a", false)]
    #[case("+7123", false)]
    fn phone_predicate_allows_digits_only(#[case] value: &str, #[case] valid: bool) {
        let criteria = UserSearchCriteria {
            phone_number: Some(value.into()),
            ..UserSearchCriteria::default()
        };
        assert_eq!(validate_search(&criteria).is_empty(), valid);
    }

    #[test]
    fn malformed_email_predicate_is_rejected() {
        let criteria = UserSearchCriteria {
            email: Some("not-an-email".into()),
            ..UserSearchCriteria::default()
        };
        let violations = validate_search(&criteria);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "email");
    }

    #[test]
    fn all_violated_rules_are_reported_together() {
        let criteria = UserSearchCriteria {
            last_name: Some("Doe42".into()),
            phone_number: Some("x".into()),
            email: Some("bad".into()),
            ..UserSearchCriteria::default()
        };
        let violations = validate_search(&criteria);
        assert_eq!(violations.len(), 3);
    }
}

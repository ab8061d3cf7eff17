//! Per-channel field policies.
//!
//! Each known [`Channel`] maps to one immutable [`FieldPolicy`] describing
//! which fields a creation request must carry, which format rules apply, and
//! which fields are permitted at all. The table is fixed at build time; the
//! engine in [`crate::domain::validation`] is a pure function over it.
//!
//! ## Invariants
//! - `allowed` is always a superset of `required`.
//! - `allowed` always contains [`ProfileField::Password`].

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::Channel;

/// Closed set of fields a creation request may carry.
///
/// The extra-field check is a set difference over this enumeration, not
/// runtime introspection of the request payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    /// Account password, required on every channel.
    Password,
    /// Family name.
    LastName,
    /// Given name.
    FirstName,
    /// Patronymic or middle name.
    MiddleName,
    /// Date of birth.
    DateOfBirth,
    /// National passport number.
    PassportNumber,
    /// Place of birth.
    PlaceOfBirth,
    /// Contact phone number.
    PhoneNumber,
    /// Contact email address.
    Email,
    /// Registration address.
    RegistrationAddress,
    /// Residential address.
    ResidentialAddress,
}

impl ProfileField {
    /// Every field, in wire-payload order.
    pub const ALL: [Self; 11] = [
        Self::Password,
        Self::LastName,
        Self::FirstName,
        Self::MiddleName,
        Self::DateOfBirth,
        Self::PassportNumber,
        Self::PlaceOfBirth,
        Self::PhoneNumber,
        Self::Email,
        Self::RegistrationAddress,
        Self::ResidentialAddress,
    ];

    /// Wire name of the field as it appears in request payloads.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::LastName => "lastName",
            Self::FirstName => "firstName",
            Self::MiddleName => "middleName",
            Self::DateOfBirth => "dateOfBirth",
            Self::PassportNumber => "passportNumber",
            Self::PlaceOfBirth => "placeOfBirth",
            Self::PhoneNumber => "phoneNumber",
            Self::Email => "email",
            Self::RegistrationAddress => "registrationAddress",
            Self::ResidentialAddress => "residentialAddress",
        }
    }
}

/// Format constraint attached to a field by a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRule {
    /// Value must look like an email address.
    Email,
    /// Value must be `7` followed by ten digits.
    Phone,
    /// Value must be four digits, a space, then six digits.
    Passport,
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();
static PASSPORT_RE: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &'static str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("format rule regex failed to compile: {error}"))
    })
}

impl FormatRule {
    /// Check a present, non-empty value against this rule.
    #[must_use]
    pub fn is_match(self, value: &str) -> bool {
        match self {
            Self::Email => compiled(&EMAIL_RE, r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_match(value),
            Self::Phone => compiled(&PHONE_RE, r"^7\d{10}$").is_match(value),
            Self::Passport => compiled(&PASSPORT_RE, r"^\d{4} \d{6}$").is_match(value),
        }
    }

    /// Human-readable description of the expected format.
    #[must_use]
    pub const fn expectation(self) -> &'static str {
        match self {
            Self::Email => "must be a valid email address",
            Self::Phone => "must be in the format 7XXXXXXXXXX",
            Self::Passport => "must be in the format XXXX XXXXXX",
        }
    }
}

/// Field rules for one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPolicy {
    channel: Channel,
    required: &'static [ProfileField],
    formats: &'static [(ProfileField, FormatRule)],
    allowed: &'static [ProfileField],
}

impl FieldPolicy {
    /// The channel this policy belongs to.
    #[must_use]
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// Fields a request on this channel must populate.
    #[must_use]
    pub const fn required(&self) -> &'static [ProfileField] {
        self.required
    }

    /// Format rules applied to present, non-empty fields.
    #[must_use]
    pub const fn formats(&self) -> &'static [(ProfileField, FormatRule)] {
        self.formats
    }

    /// Whether a field may appear on this channel at all.
    #[must_use]
    pub fn allows(&self, field: ProfileField) -> bool {
        self.allowed.contains(&field)
    }
}

const MAIL_POLICY: FieldPolicy = FieldPolicy {
    channel: Channel::Mail,
    required: &[ProfileField::FirstName, ProfileField::Email],
    formats: &[(ProfileField::Email, FormatRule::Email)],
    allowed: &[
        ProfileField::Password,
        ProfileField::FirstName,
        ProfileField::Email,
    ],
};

const MOBILE_POLICY: FieldPolicy = FieldPolicy {
    channel: Channel::Mobile,
    required: &[ProfileField::PhoneNumber],
    formats: &[(ProfileField::PhoneNumber, FormatRule::Phone)],
    allowed: &[ProfileField::Password, ProfileField::PhoneNumber],
};

const WEB_POLICY: FieldPolicy = FieldPolicy {
    channel: Channel::Web,
    required: &[
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::DateOfBirth,
        ProfileField::PassportNumber,
        ProfileField::PlaceOfBirth,
        ProfileField::PhoneNumber,
        ProfileField::RegistrationAddress,
    ],
    formats: &[
        (ProfileField::PassportNumber, FormatRule::Passport),
        (ProfileField::PhoneNumber, FormatRule::Phone),
    ],
    allowed: &[
        ProfileField::Password,
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::DateOfBirth,
        ProfileField::PassportNumber,
        ProfileField::PlaceOfBirth,
        ProfileField::PhoneNumber,
        ProfileField::RegistrationAddress,
    ],
};

/// Resolve the field policy for a recognised channel.
///
/// Total over [`Channel`]; the *unspecified* channel is represented by the
/// caller holding `None` before this lookup.
///
/// # Examples
/// ```
/// use backend::domain::{Channel, ProfileField, policy_for};
///
/// let policy = policy_for(Channel::Mobile);
/// assert!(policy.allows(ProfileField::Password));
/// assert!(!policy.allows(ProfileField::Email));
/// ```
#[must_use]
pub const fn policy_for(channel: Channel) -> &'static FieldPolicy {
    match channel {
        Channel::Mail => &MAIL_POLICY,
        Channel::Mobile => &MOBILE_POLICY,
        Channel::Web => &WEB_POLICY,
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Channel::Mail)]
    #[case(Channel::Mobile)]
    #[case(Channel::Web)]
    fn allowed_is_superset_of_required_and_includes_password(#[case] channel: Channel) {
        let policy = policy_for(channel);
        assert!(policy.allows(ProfileField::Password));
        for field in policy.required() {
            assert!(
                policy.allows(*field),
                "required field {:?} must be allowed on {channel}",
                field
            );
        }
    }

    #[rstest]
    #[case(Channel::Mail)]
    #[case(Channel::Mobile)]
    #[case(Channel::Web)]
    fn format_checked_fields_are_allowed(#[case] channel: Channel) {
        let policy = policy_for(channel);
        for (field, _) in policy.formats() {
            assert!(policy.allows(*field));
        }
    }

    #[rstest]
    #[case("a@b.com", true)]
    #[case("testemail@mail.com", true)]
    #[case("no-at-sign", false)]
    #[case("two@@at.com", false)]
    #[case("spaces in@mail.com", false)]
    fn email_rule_matches_expected_shapes(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(FormatRule::Email.is_match(value), expected);
    }

    #[rstest]
    #[case("71234567890", true)]
    #[case("81234567890", false)]
    #[case("7123456789", false)]
    #[case("712345678901", false)]
    #[case("7123456789a", false)]
    fn phone_rule_requires_seven_plus_ten_digits(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(FormatRule::Phone.is_match(value), expected);
    }

    #[rstest]
    #[case("1234 567890", true)]
    #[case("1234567890", false)]
    #[case("123 4567890", false)]
    #[case("1234 56789", false)]
    fn passport_rule_requires_four_space_six(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(FormatRule::Passport.is_match(value), expected);
    }

    #[test]
    fn residential_address_is_not_allowed_on_any_channel() {
        for channel in [Channel::Mail, Channel::Mobile, Channel::Web] {
            assert!(!policy_for(channel).allows(ProfileField::ResidentialAddress));
        }
    }
}

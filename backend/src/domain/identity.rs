//! Derivation of identity fields left unset by the caller.
//!
//! The login handle and the contact email are derived independently from
//! whatever contact data the validated input carries. Randomness is confined
//! to [`random_suffix`]; the derivations are otherwise deterministic.

use rand::RngCore;

/// Derive a login handle from the available contact fields.
///
/// Preference order: the local part of the email (the whole value when it
/// has no `@`), then `user_` + phone number, then `user_` + a random
/// 8-character hex suffix.
///
/// # Examples
/// ```
/// use backend::domain::identity::derive_login_handle;
///
/// assert_eq!(derive_login_handle(Some("ada@example.com"), None), "ada");
/// assert_eq!(derive_login_handle(None, Some("71234567890")), "user_71234567890");
/// ```
#[must_use]
pub fn derive_login_handle(email: Option<&str>, phone: Option<&str>) -> String {
    if let Some(email) = non_empty(email) {
        return email.split('@').next().unwrap_or(email).to_owned();
    }
    if let Some(phone) = non_empty(phone) {
        return format!("user_{phone}");
    }
    format!("user_{}", random_suffix())
}

/// Derive a contact email from the available contact fields.
///
/// Preference order: the email as supplied, then `{phone}@example.com`,
/// then a generated `user_{suffix}@example.com` placeholder.
///
/// The fallback suffix is drawn independently from the one used by
/// [`derive_login_handle`]; a record with neither email nor phone receives
/// two unrelated tokens.
#[must_use]
pub fn derive_contact_email(email: Option<&str>, phone: Option<&str>) -> String {
    if let Some(email) = non_empty(email) {
        return email.to_owned();
    }
    if let Some(phone) = non_empty(phone) {
        return format!("{phone}@example.com");
    }
    format!("user_{}@example.com", random_suffix())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Draw a fresh 8-character lowercase hex token.
///
/// The single impure branch of the derivation logic.
fn random_suffix() -> String {
    format!("{:08x}", rand::thread_rng().next_u32())
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ada@example.com", "ada")]
    #[case("no-at-sign", "no-at-sign")]
    #[case("a@b@c", "a")]
    fn login_handle_uses_email_local_part(#[case] email: &str, #[case] expected: &str) {
        assert_eq!(derive_login_handle(Some(email), None), expected);
    }

    #[test]
    fn login_handle_is_deterministic_for_the_same_email() {
        let first = derive_login_handle(Some("ada@example.com"), Some("71234567890"));
        let second = derive_login_handle(Some("ada@example.com"), None);
        assert_eq!(first, second);
    }

    #[test]
    fn login_handle_falls_back_to_phone() {
        assert_eq!(
            derive_login_handle(None, Some("71234567890")),
            "user_71234567890"
        );
        // Empty strings are treated as absent.
        assert_eq!(
            derive_login_handle(Some(""), Some("71234567890")),
            "user_71234567890"
        );
    }

    #[test]
    fn login_handle_random_fallback_has_expected_shape() {
        let handle = derive_login_handle(None, None);
        let suffix = handle.strip_prefix("user_").expect("user_ prefix");
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn contact_email_prefers_supplied_email() {
        assert_eq!(
            derive_contact_email(Some("ada@example.com"), Some("71234567890")),
            "ada@example.com"
        );
    }

    #[test]
    fn contact_email_builds_from_phone() {
        assert_eq!(
            derive_contact_email(None, Some("71234567890")),
            "71234567890@example.com"
        );
    }

    #[test]
    fn contact_email_random_fallback_has_expected_shape() {
        let email = derive_contact_email(None, None);
        let local = email.strip_suffix("@example.com").expect("example suffix");
        let suffix = local.strip_prefix("user_").expect("user_ prefix");
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }
}

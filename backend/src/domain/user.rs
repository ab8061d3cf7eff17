//! User-facing data shapes for provisioning and search.
//!
//! ## Serialisation contracts
//! All three types use camelCase wire names. [`UserCreationInput`] is the
//! creation request body; unknown JSON keys are ignored — the extra-field
//! rules in [`crate::domain::validation`] operate on the closed
//! [`ProfileField`] set, not on arbitrary payload keys.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::ProfileField;

/// Raw field set submitted by a caller to create an account.
///
/// Only the password is mandatory at the type level; which of the profile
/// fields must (or may) be populated depends on the resolved channel policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserCreationInput {
    /// Account password; checked against the password policy on every channel.
    pub password: String,
    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Patronymic or middle name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Date of birth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    /// National passport number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,
    /// Place of birth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_of_birth: Option<String>,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Contact email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Registration address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_address: Option<String>,
    /// Residential address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residential_address: Option<String>,
}

impl UserCreationInput {
    /// Whether the field was supplied at all, empty strings included.
    ///
    /// The extra-field check treats any supplied field as present; emptiness
    /// only matters to the required-field rules.
    #[must_use]
    pub fn is_provided(&self, field: ProfileField) -> bool {
        match field {
            ProfileField::Password => true,
            ProfileField::DateOfBirth => self.date_of_birth.is_some(),
            _ => self.text_value(field).is_some(),
        }
    }

    /// Whether the field carries a usable value.
    ///
    /// A field present as an empty string is treated as absent here, per the
    /// required-field contract.
    #[must_use]
    pub fn is_populated(&self, field: ProfileField) -> bool {
        match field {
            ProfileField::Password => !self.password.is_empty(),
            ProfileField::DateOfBirth => self.date_of_birth.is_some(),
            _ => self.text_value(field).is_some_and(|value| !value.is_empty()),
        }
    }

    /// Borrow the string value of a text field, if supplied.
    ///
    /// Returns `None` for [`ProfileField::Password`] and
    /// [`ProfileField::DateOfBirth`], which are not free-form text fields.
    #[must_use]
    pub fn text_value(&self, field: ProfileField) -> Option<&str> {
        match field {
            ProfileField::Password | ProfileField::DateOfBirth => None,
            ProfileField::LastName => self.last_name.as_deref(),
            ProfileField::FirstName => self.first_name.as_deref(),
            ProfileField::MiddleName => self.middle_name.as_deref(),
            ProfileField::PassportNumber => self.passport_number.as_deref(),
            ProfileField::PlaceOfBirth => self.place_of_birth.as_deref(),
            ProfileField::PhoneNumber => self.phone_number.as_deref(),
            ProfileField::Email => self.email.as_deref(),
            ProfileField::RegistrationAddress => self.registration_address.as_deref(),
            ProfileField::ResidentialAddress => self.residential_address.as_deref(),
        }
    }
}

/// Sparse predicate set for searching accounts.
///
/// At least one predicate must be populated; the query validator enforces
/// this before the search service is reached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchCriteria {
    /// Exact-match account identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    /// Family-name substring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Given-name substring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Middle-name substring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Phone-number substring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Email substring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserSearchCriteria {
    /// Whether no usable predicate was supplied.
    ///
    /// Empty-string predicates count as absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none()
            && !has_text(self.last_name.as_deref())
            && !has_text(self.first_name.as_deref())
            && !has_text(self.middle_name.as_deref())
            && !has_text(self.phone_number.as_deref())
            && !has_text(self.email.as_deref())
    }
}

fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Search result projection of a stored account.
///
/// Derived fresh per query from the store's records, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// Store-assigned account identifier.
    pub id: Uuid,
    /// Given name, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Middle name, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Phone number, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Contact email; always present because creation derives one.
    pub email: String,
}

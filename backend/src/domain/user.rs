//! Guest accounts.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest name, email or address accepted at registration, in characters.
pub const USER_TEXT_MAX: usize = 255;
/// Longest phone number accepted at registration, in characters.
pub const PHONE_NUMBER_MAX: usize = 50;
/// Length of a canonical hyphenated UUID.
const CANONICAL_ID_LEN: usize = 36;

/// Validation errors raised by user constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    #[error("user id must not be empty")]
    EmptyId,
    #[error("user id must be a canonical hyphenated UUID")]
    InvalidId,
    #[error("name must not be empty")]
    EmptyName,
    #[error("email must not be empty")]
    EmptyEmail,
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Stable user identifier: a UUID in its 36-character hyphenated form.
///
/// The textual form is normalised to lowercase so lookups are independent of
/// the caller's casing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    ///
    /// # Examples
    /// ```
    /// use booking::domain::UserId;
    ///
    /// let id = UserId::new("6F1C3E4A-2B7D-4C1E-9A0B-1D2E3F4A5B6C").expect("valid id");
    /// assert_eq!(id.as_ref(), "6f1c3e4a-2b7d-4c1e-9a0b-1d2e3f4a5b6c");
    /// assert!(UserId::new("6f1c3e4a2b7d4c1e9a0b1d2e3f4a5b6c").is_err());
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        // Uuid::parse_str also accepts simple, braced and urn forms.
        if id.len() != CANONICAL_ID_LEN {
            return Err(UserValidationError::InvalidId);
        }
        let parsed = Uuid::parse_str(id).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self::from_uuid(parsed))
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid.hyphenated().to_string())
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Account status label. New accounts are `"active"`; the value is never
/// consulted by the booking flows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserStatus(String);

impl UserStatus {
    pub const ACTIVE: &'static str = "active";

    pub fn active() -> Self {
        Self(Self::ACTIVE.to_owned())
    }

    /// Wrap a stored status label verbatim.
    pub fn from_stored(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Trimmed, length-checked contact details supplied at registration.
///
/// # Examples
/// ```
/// use booking::domain::ContactDetails;
///
/// let details = ContactDetails::new(" Ada ", " ada@example.com ", "", "").expect("valid");
/// assert_eq!(details.email(), "ada@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    name: String,
    email: String,
    phone_number: String,
    address: String,
}

impl ContactDetails {
    pub fn new(
        name: &str,
        email: &str,
        phone_number: &str,
        address: &str,
    ) -> Result<Self, UserValidationError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if email.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }

        let phone_number = phone_number.trim();
        let address = address.trim();
        for (field, value, max) in [
            ("name", name, USER_TEXT_MAX),
            ("email", email, USER_TEXT_MAX),
            ("phone_number", phone_number, PHONE_NUMBER_MAX),
            ("address", address, USER_TEXT_MAX),
        ] {
            if value.chars().count() > max {
                return Err(UserValidationError::TooLong { field, max });
            }
        }

        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            phone_number: phone_number.to_owned(),
            address: address.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn phone_number(&self) -> &str {
        self.phone_number.as_str()
    }

    pub fn address(&self) -> &str {
        self.address.as_str()
    }
}

/// A user that has not been persisted yet.
///
/// Repositories assign a random [`UserId`] when `id` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub id: Option<UserId>,
    pub contact: ContactDetails,
    pub date_of_birth: Option<NaiveDate>,
    pub registered_at: DateTime<Utc>,
    pub status: UserStatus,
}

/// A registered guest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    contact: ContactDetails,
    date_of_birth: Option<NaiveDate>,
    registered_at: DateTime<Utc>,
    status: UserStatus,
}

impl User {
    /// Attach the persisted identifier to a draft.
    pub fn from_new(id: UserId, draft: NewUser) -> Self {
        let NewUser {
            contact,
            date_of_birth,
            registered_at,
            status,
            ..
        } = draft;
        Self {
            id,
            contact,
            date_of_birth,
            registered_at,
            status,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.contact.name()
    }

    pub fn email(&self) -> &str {
        self.contact.email()
    }

    /// Free text; empty when not supplied.
    pub fn phone_number(&self) -> &str {
        self.contact.phone_number()
    }

    /// Free text; empty when not supplied.
    pub fn address(&self) -> &str {
        self.contact.address()
    }

    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    pub fn status(&self) -> &UserStatus {
        &self.status
    }
}

//! User registration and lookup use cases.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use mockable::Clock;
use serde_json::json;
use tracing::debug;

use crate::domain::ports::{
    RegisterUserRequest, UserCommand, UserQuery, UserRepository, UserRepositoryError,
};
use crate::domain::{ContactDetails, Error, NewUser, User, UserId, UserStatus};

const DATE_OF_BIRTH_FORMAT: &str = "%Y-%m-%d";

/// Failures of the user use cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
    #[error("email already exists")]
    EmailAlreadyExists,
    #[error("user storage failed: {message}")]
    Storage { message: String },
}

impl UserError {
    /// Stable snake_case name used in error details.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::EmailAlreadyExists => "email_already_exists",
            Self::Storage { .. } => "storage_error",
        }
    }

    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl From<UserRepositoryError> for UserError {
    fn from(value: UserRepositoryError) -> Self {
        match value {
            UserRepositoryError::UniqueViolation { .. } => Self::EmailAlreadyExists,
            other => {
                debug!(error = %other, "user persistence failed");
                Self::Storage {
                    message: other.to_string(),
                }
            }
        }
    }
}

impl From<UserError> for Error {
    fn from(value: UserError) -> Self {
        let details = json!({ "code": value.kind() });
        let error = match &value {
            UserError::InvalidInput { .. } => Error::invalid_request(value.to_string()),
            UserError::EmailAlreadyExists => Error::conflict(value.to_string()),
            UserError::Storage { .. } => Error::internal(value.to_string()),
        };
        error.with_details(details)
    }
}

/// User service backed by a [`UserRepository`] and a wall clock.
#[derive(Clone)]
pub struct UserService<U> {
    users: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<U> UserService<U>
where
    U: UserRepository,
{
    /// Create the service.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// # use booking::domain::UserService;
    /// # use booking::outbound::memory::MemoryUserRepository;
    /// let service = UserService::new(
    ///     Arc::new(MemoryUserRepository::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(users: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self { users, clock }
    }

    /// Register a user.
    ///
    /// Name and email are checked first, then email uniqueness, then the
    /// date of birth. A unique-constraint failure on insert is reported as
    /// [`UserError::EmailAlreadyExists`].
    pub async fn register_user(&self, request: RegisterUserRequest) -> Result<User, UserError> {
        let contact = ContactDetails::new(
            &request.name,
            &request.email,
            &request.phone_number,
            &request.address,
        )
        .map_err(|err| UserError::invalid(err.to_string()))?;

        if self.users.find_by_email(contact.email()).await?.is_some() {
            return Err(UserError::EmailAlreadyExists);
        }

        let date_of_birth = parse_date_of_birth(&request.date_of_birth)?;

        let draft = NewUser {
            id: None,
            contact,
            date_of_birth,
            registered_at: self.clock.utc(),
            status: UserStatus::active(),
        };
        let user = self.users.create(&draft).await?;
        debug!(user_id = %user.id(), "user registered");
        Ok(user)
    }

    /// Look up a user by raw identifier text.
    ///
    /// Text that is not a canonical UUID cannot name a stored user and yields
    /// `Ok(None)`.
    pub async fn find_user(&self, id: &str) -> Result<Option<User>, UserError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(UserError::invalid("id must not be empty"));
        }
        let Ok(id) = UserId::new(id) else {
            return Ok(None);
        };
        Ok(self.users.find_by_id(&id).await?)
    }
}

fn parse_date_of_birth(raw: &str) -> Result<Option<NaiveDate>, UserError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DATE_OF_BIRTH_FORMAT)
        .map(Some)
        .map_err(|_| UserError::invalid("date_of_birth must be YYYY-MM-DD"))
}

#[async_trait]
impl<U> UserCommand for UserService<U>
where
    U: UserRepository,
{
    async fn register(&self, request: RegisterUserRequest) -> Result<UserId, Error> {
        let user = self.register_user(request).await?;
        Ok(user.id().clone())
    }
}

#[async_trait]
impl<U> UserQuery for UserService<U>
where
    U: UserRepository,
{
    async fn get_user(&self, id: &str) -> Result<User, Error> {
        self.find_user(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("user {} not found", id.trim())))
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;

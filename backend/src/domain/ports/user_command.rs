//! Driving port for user registration.

use async_trait::async_trait;

use crate::domain::{Error, UserId};

/// Registration form fields, untrimmed. `date_of_birth` is `YYYY-MM-DD` or
/// blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub date_of_birth: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserCommand: Send + Sync {
    /// Register a user and return the assigned identifier.
    async fn register(&self, request: RegisterUserRequest) -> Result<UserId, Error>;
}

//! In-memory user store with an email index.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{NewUser, User, UserId};

#[derive(Debug, Default)]
struct State {
    by_id: HashMap<UserId, User>,
    by_email: HashMap<String, UserId>,
}

#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    state: RwLock<State>,
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, UserRepositoryError> {
        let mut state = self.state.write().await;
        let email = user.contact.email();
        if state.by_email.contains_key(email) {
            return Err(UserRepositoryError::unique_violation(format!(
                "email {email} is already registered"
            )));
        }

        let id = user.id.clone().unwrap_or_else(UserId::random);
        if state.by_id.contains_key(&id) {
            return Err(UserRepositoryError::query(format!("user {id} already exists")));
        }

        let created = User::from_new(id.clone(), user.clone());
        state.by_email.insert(email.to_owned(), id.clone());
        state.by_id.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        if email.trim().is_empty() {
            return Ok(None);
        }
        let state = self.state.read().await;
        Ok(state
            .by_email
            .get(email)
            .and_then(|id| state.by_id.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.state.read().await.by_id.get(id).cloned())
    }
}

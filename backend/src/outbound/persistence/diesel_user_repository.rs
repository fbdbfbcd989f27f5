//! MySQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{ContactDetails, NewUser, User, UserId, UserStatus};

use super::diesel_basic_error_mapping::{
    is_secondary_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserRepositoryError {
    map_basic_pool_error(error, UserRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> UserRepositoryError {
    if is_secondary_unique_violation(&error) {
        return UserRepositoryError::unique_violation("email already registered");
    }
    map_basic_diesel_error(
        error,
        UserRepositoryError::query,
        UserRepositoryError::connection,
    )
}

fn row_to_user(row: UserRow) -> Result<User, UserRepositoryError> {
    let UserRow {
        id,
        name,
        email,
        phone_number,
        address,
        date_of_birth,
        registered_at,
        status,
    } = row;
    let invalid = |err: &dyn std::fmt::Display| {
        UserRepositoryError::query(format!("invalid user row: {err}"))
    };

    let id = UserId::new(&id).map_err(|err| invalid(&err))?;
    let contact =
        ContactDetails::new(&name, &email, &phone_number, &address).map_err(|err| invalid(&err))?;
    Ok(User::from_new(
        id,
        NewUser {
            id: None,
            contact,
            date_of_birth,
            registered_at: registered_at.and_utc(),
            status: UserStatus::from_stored(status),
        },
    ))
}

fn registered_at_for_db(registered_at: DateTime<Utc>) -> chrono::NaiveDateTime {
    registered_at.naive_utc()
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, UserRepositoryError> {
        let id = user.id.clone().unwrap_or_else(UserId::random);
        let row = NewUserRow {
            id: id.as_ref(),
            name: user.contact.name(),
            email: user.contact.email(),
            phone_number: user.contact.phone_number(),
            address: user.contact.address(),
            date_of_birth: user.date_of_birth,
            registered_at: registered_at_for_db(user.registered_at),
            status: user.status.as_str(),
        };

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(User::from_new(id, user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        if email.trim().is_empty() {
            return Ok(None);
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = users::table
            .filter(users::email.eq(email))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_user).transpose()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = users::table
            .find(id.as_ref())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_user).transpose()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn row() -> UserRow {
        UserRow {
            id: "3fa85f64-5717-4562-b3fc-2c963f66afa6".to_owned(),
            name: "A".to_owned(),
            email: "a@x".to_owned(),
            phone_number: String::new(),
            address: String::new(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 2),
            registered_at: NaiveDate::from_ymd_opt(2025, 10, 1)
                .and_then(|d| d.and_hms_opt(9, 30, 0))
                .expect("timestamp"),
            status: "suspended".to_owned(),
        }
    }

    #[test]
    fn row_to_user_keeps_stored_status() {
        let user = row_to_user(row()).expect("valid row");
        assert_eq!(user.status().as_str(), "suspended");
        assert_eq!(user.registered_at().to_rfc3339(), "2025-10-01T09:30:00+00:00");
    }

    #[test]
    fn row_to_user_rejects_blank_email() {
        let mut bad = row();
        bad.email = " ".to_owned();
        assert!(matches!(
            row_to_user(bad),
            Err(UserRepositoryError::Query { .. })
        ));
    }

    #[test]
    fn registered_at_round_trips_through_naive_utc() {
        let at = row().registered_at.and_utc();
        assert_eq!(registered_at_for_db(at).and_utc(), at);
    }
}

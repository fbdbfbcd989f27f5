//! Tests for the user service.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockUserRepository;

const USER_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn registered_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

fn service(users: MockUserRepository) -> UserService<MockUserRepository> {
    UserService::new(
        Arc::new(users),
        Arc::new(FixtureClock {
            utc_now: registered_at(),
        }),
    )
}

fn stored(draft: &NewUser) -> User {
    User::from_new(UserId::new(USER_ID).expect("valid id"), draft.clone())
}

#[fixture]
fn request() -> RegisterUserRequest {
    RegisterUserRequest {
        name: " A ".to_owned(),
        email: " a@x ".to_owned(),
        phone_number: String::new(),
        address: String::new(),
        date_of_birth: "1990-01-02".to_owned(),
    }
}

#[rstest]
#[tokio::test]
async fn register_builds_active_user_from_trimmed_fields(request: RegisterUserRequest) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .withf(|email| email == "a@x")
        .times(1)
        .returning(|_| Ok(None));
    users
        .expect_create()
        .withf(|draft| {
            draft.id.is_none()
                && draft.contact.name() == "A"
                && draft.contact.email() == "a@x"
                && draft.status.as_str() == "active"
                && draft.registered_at == registered_at()
        })
        .times(1)
        .returning(|draft| Ok(stored(draft)));

    let user = service(users)
        .register_user(request)
        .await
        .expect("registration succeeds");

    assert_eq!(user.id().as_ref(), USER_ID);
    assert_eq!(
        user.date_of_birth(),
        chrono::NaiveDate::from_ymd_opt(1990, 1, 2)
    );
}

#[rstest]
#[tokio::test]
async fn blank_date_of_birth_is_stored_as_none(mut request: RegisterUserRequest) {
    request.date_of_birth = "   ".to_owned();
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().returning(|_| Ok(None));
    users
        .expect_create()
        .withf(|draft| draft.date_of_birth.is_none())
        .times(1)
        .returning(|draft| Ok(stored(draft)));

    let user = service(users)
        .register_user(request)
        .await
        .expect("registration succeeds");

    assert!(user.date_of_birth().is_none());
}

#[rstest]
#[case("  ", "a@x")]
#[case("A", "")]
#[tokio::test]
async fn missing_name_or_email_is_invalid_input(
    mut request: RegisterUserRequest,
    #[case] name: &str,
    #[case] email: &str,
) {
    request.name = name.to_owned();
    request.email = email.to_owned();
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().times(0);

    let err = service(users)
        .register_user(request)
        .await
        .expect_err("invalid input");

    assert!(matches!(err, UserError::InvalidInput { .. }));
}

#[rstest]
#[tokio::test]
async fn existing_email_is_rejected_before_date_parsing(mut request: RegisterUserRequest) {
    request.date_of_birth = "not a date".to_owned();
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().times(1).returning(|_| {
        let draft = NewUser {
            id: None,
            contact: ContactDetails::new("B", "a@x", "", "").expect("valid contact"),
            date_of_birth: None,
            registered_at: registered_at(),
            status: UserStatus::active(),
        };
        Ok(Some(stored(&draft)))
    });
    users.expect_create().times(0);

    let err = service(users)
        .register_user(request)
        .await
        .expect_err("duplicate email");

    assert_eq!(err, UserError::EmailAlreadyExists);
}

#[rstest]
#[case("02/01/1990")]
#[case("1990-13-01")]
#[case("yesterday")]
#[tokio::test]
async fn malformed_date_of_birth_is_invalid_input(
    mut request: RegisterUserRequest,
    #[case] date_of_birth: &str,
) {
    request.date_of_birth = date_of_birth.to_owned();
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().returning(|_| Ok(None));
    users.expect_create().times(0);

    let err = service(users)
        .register_user(request)
        .await
        .expect_err("invalid date");

    assert!(matches!(err, UserError::InvalidInput { .. }));
}

#[rstest]
#[tokio::test]
async fn unique_violation_on_insert_is_email_already_exists(request: RegisterUserRequest) {
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().returning(|_| Ok(None));
    users
        .expect_create()
        .times(1)
        .returning(|_| Err(UserRepositoryError::unique_violation("users.email")));

    let err = service(users)
        .register_user(request)
        .await
        .expect_err("race lost");

    assert_eq!(err, UserError::EmailAlreadyExists);
}

#[rstest]
#[tokio::test]
async fn storage_failures_surface_as_internal(request: RegisterUserRequest) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .returning(|_| Err(UserRepositoryError::connection("refused")));

    let err: Error = UserCommand::register(&service(users), request)
        .await
        .expect_err("storage failure");

    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn duplicate_email_maps_to_conflict(request: RegisterUserRequest) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .returning(|_| Ok(None));
    users
        .expect_create()
        .returning(|_| Err(UserRepositoryError::unique_violation("users.email")));

    let err: Error = UserCommand::register(&service(users), request)
        .await
        .expect_err("conflict");

    assert_eq!(err.code(), ErrorCode::Conflict);
}

#[rstest]
#[case("")]
#[case("   ")]
#[tokio::test]
async fn get_user_rejects_blank_id(#[case] id: &str) {
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().times(0);

    let err = service(users).find_user(id).await.expect_err("blank id");

    assert!(matches!(err, UserError::InvalidInput { .. }));
}

#[tokio::test]
async fn get_user_treats_non_uuid_as_absent() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().times(0);
    let svc = service(users);

    assert_eq!(svc.find_user("user-1").await, Ok(None));
    let err = UserQuery::get_user(&svc, "user-1")
        .await
        .expect_err("absent user");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn get_user_trims_and_delegates() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .withf(|id| id.as_ref() == USER_ID)
        .times(1)
        .returning(|_| {
            let draft = NewUser {
                id: None,
                contact: ContactDetails::new("A", "a@x", "", "").expect("valid contact"),
                date_of_birth: None,
                registered_at: registered_at(),
                status: UserStatus::active(),
            };
            Ok(Some(stored(&draft)))
        });

    let user = UserQuery::get_user(&service(users), &format!(" {USER_ID} "))
        .await
        .expect("user found");

    assert_eq!(user.email(), "a@x");
}

//! User registration and lookup handlers.
//!
//! ```text
//! POST /register {"name":"Hanako","email":"hanako@example.com","date_of_birth":"1990-04-01"}
//! GET /users/{id}
//! ```

use actix_web::{HttpResponse, get, post, web};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::RegisterUserRequest;
use crate::domain::{Error, User};
use crate::inbound::http::{ApiResult, null_as_default};
use crate::inbound::http::reservations::DATE_FORMAT;
use crate::inbound::http::state::{HttpState, require_state};

/// Request body for `POST /register`. Omitted and `null` fields are treated
/// as blank.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct RegisterUserBody {
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "Hanako Yamada")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "hanako@example.com")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "1990-04-01")]
    pub date_of_birth: String,
}

impl From<RegisterUserBody> for RegisterUserRequest {
    fn from(value: RegisterUserBody) -> Self {
        Self {
            name: value.name,
            email: value.email,
            phone_number: value.phone_number,
            address: value.address,
            date_of_birth: value.date_of_birth,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UserRegistered {
    pub id: String,
}

/// User as returned to clients. `date_of_birth` is `""` when unknown.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub date_of_birth: String,
    #[schema(example = "2025-10-01T09:30:00Z")]
    pub registered_at: String,
    #[schema(example = "active")]
    pub status: String,
}

impl From<User> for UserView {
    fn from(value: User) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().to_owned(),
            email: value.email().to_owned(),
            phone_number: value.phone_number().to_owned(),
            address: value.address().to_owned(),
            date_of_birth: value
                .date_of_birth()
                .map(|dob| dob.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            registered_at: value
                .registered_at()
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            status: value.status().as_str().to_owned(),
        }
    }
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterUserBody,
    responses(
        (status = 201, description = "User registered", body = UserRegistered),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Email already registered", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/register")]
pub async fn register(
    state: Option<web::Data<HttpState>>,
    payload: web::Json<RegisterUserBody>,
) -> ApiResult<HttpResponse> {
    let state = require_state(state)?;
    let id = state.users.register(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(UserRegistered { id: id.to_string() }))
}

/// Fetch a user by id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    responses(
        (status = 200, description = "User", body = UserView),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: Option<web::Data<HttpState>>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserView>> {
    let state = require_state(state)?;
    let user = state.users_query.get_user(&path.into_inner()).await?;
    Ok(web::Json(UserView::from(user)))
}

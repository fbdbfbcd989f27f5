//! OpenAPI documentation for the booking API.
//!
//! [`ApiDoc`] backs Swagger UI in debug builds and is printed by the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::plans::PlanView;
use crate::inbound::http::reservations::{
    CreateReservationBody, ReservationCreated, ReservationView,
};
use crate::inbound::http::users::{RegisterUserBody, UserRegistered, UserView};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hotel booking API",
        description = "Plan search, reservations and guest registration."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::reservations::create_reservation,
        crate::inbound::http::reservations::list_reservations,
        crate::inbound::http::reservations::get_reservation,
        crate::inbound::http::plans::search_plans,
        crate::inbound::http::users::register,
        crate::inbound::http::users::get_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        CreateReservationBody,
        ReservationCreated,
        ReservationView,
        PlanView,
        RegisterUserBody,
        UserRegistered,
        UserView,
    )),
    tags(
        (name = "reservations", description = "Create and read reservations"),
        (name = "plans", description = "Search the plan catalogue"),
        (name = "users", description = "Register and look up guests"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

//! Reservation HTTP handlers.
//!
//! ```text
//! POST /reservations
//!   {"user_id":"…","plan_id":100,"number":2,"checkin":"2025-10-12","checkout":"2025-10-14"}
//! GET /reservations
//! GET /reservations/{id}
//! ```

use actix_web::{HttpResponse, get, post, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::ports::CreateReservationRequest;
use crate::domain::{Error, Reservation, ReservationId};
use crate::inbound::http::{ApiResult, null_as_default};
use crate::inbound::http::state::{HttpState, require_state};

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Request body for `POST /reservations`.
///
/// Missing and `null` fields take their zero value and are rejected by the
/// reservation rules rather than by the JSON decoder.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct CreateReservationBody {
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub user_id: String,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = 100)]
    pub plan_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = 2)]
    pub number: i64,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "2025-10-12")]
    pub checkin: String,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "2025-10-14")]
    pub checkout: String,
}

/// Identifier of a newly saved reservation.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ReservationCreated {
    pub id: i64,
}

/// Reservation as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ReservationView {
    pub id: i64,
    pub user_id: String,
    pub plan_id: i64,
    pub number: i64,
    #[schema(example = "2025-10-12")]
    pub checkin: String,
    #[schema(example = "2025-10-14")]
    pub checkout: String,
    pub total: i64,
    pub nights: i64,
}

impl From<Reservation> for ReservationView {
    fn from(value: Reservation) -> Self {
        Self {
            id: value.id().get(),
            user_id: value.user_id().to_string(),
            plan_id: value.plan_id().get(),
            number: value.number(),
            checkin: value.checkin().format(DATE_FORMAT).to_string(),
            checkout: value.checkout().format(DATE_FORMAT).to_string(),
            total: value.total(),
            nights: value.nights(),
        }
    }
}

fn parse_date(value: &str, field: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        Error::invalid_request("invalid date format (yyyy-mm-dd)").with_details(json!({
            "field": field,
            "value": value,
            "code": "invalid_date",
        }))
    })
}

fn parse_create_body(body: CreateReservationBody) -> Result<CreateReservationRequest, Error> {
    let checkin = parse_date(&body.checkin, "checkin")?;
    let checkout = parse_date(&body.checkout, "checkout")?;
    Ok(CreateReservationRequest {
        user_id: body.user_id,
        plan_id: body.plan_id,
        number: body.number,
        checkin,
        checkout,
    })
}

/// Path identifiers that are integers but not positive cannot name a stored
/// reservation, so they are reported as absent.
fn parse_reservation_id(raw: &str) -> Result<ReservationId, Error> {
    let id: i64 = raw.trim().parse().map_err(|_| {
        Error::invalid_request("invalid id").with_details(json!({
            "field": "id",
            "value": raw,
            "code": "invalid_id",
        }))
    })?;
    ReservationId::new(id).map_err(|_| Error::not_found(format!("reservation {id} not found")))
}

/// Create a reservation.
#[utoipa::path(
    post,
    path = "/reservations",
    request_body = CreateReservationBody,
    responses(
        (status = 200, description = "Reservation saved", body = ReservationCreated),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "User or plan not found", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["reservations"],
    operation_id = "createReservation"
)]
#[post("/reservations")]
pub async fn create_reservation(
    state: Option<web::Data<HttpState>>,
    payload: web::Json<CreateReservationBody>,
) -> ApiResult<web::Json<ReservationCreated>> {
    let state = require_state(state)?;
    let request = parse_create_body(payload.into_inner())?;
    let id = state.reservations.create_reservation(request).await?;
    Ok(web::Json(ReservationCreated { id: id.get() }))
}

/// List every reservation, oldest first.
#[utoipa::path(
    get,
    path = "/reservations",
    responses(
        (status = 200, description = "Reservations", body = [ReservationView]),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["reservations"],
    operation_id = "listReservations"
)]
#[get("/reservations")]
pub async fn list_reservations(
    state: Option<web::Data<HttpState>>,
) -> ApiResult<web::Json<Vec<ReservationView>>> {
    let state = require_state(state)?;
    let reservations = state.reservations_query.list_reservations().await?;
    Ok(web::Json(
        reservations.into_iter().map(ReservationView::from).collect(),
    ))
}

/// Fetch one reservation.
#[utoipa::path(
    get,
    path = "/reservations/{id}",
    params(("id" = i64, Path, description = "Reservation identifier")),
    responses(
        (status = 200, description = "Reservation", body = ReservationView),
        (status = 400, description = "Identifier is not an integer", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["reservations"],
    operation_id = "getReservation"
)]
#[get("/reservations/{id}")]
pub async fn get_reservation(
    state: Option<web::Data<HttpState>>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let state = require_state(state)?;
    let id = parse_reservation_id(&path.into_inner())?;
    let reservation = state.reservations_query.get_reservation(id).await?;
    Ok(HttpResponse::Ok().json(ReservationView::from(reservation)))
}

#[cfg(test)]
#[path = "reservations_tests.rs"]
mod tests;

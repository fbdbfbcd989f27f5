//! Plan search handler.
//!
//! ```text
//! GET /plans?keyword=富士
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Error, Plan};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::{HttpState, require_state};

/// Query string for `GET /plans`. A missing or blank keyword lists every plan.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(default)]
pub struct PlanSearchParams {
    pub keyword: String,
}

/// Plan as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct PlanView {
    #[schema(example = 100)]
    pub id: i64,
    #[schema(example = "富士プレミアム")]
    pub name: String,
    pub keyword: String,
    #[schema(example = 12000)]
    pub price: i64,
}

impl From<Plan> for PlanView {
    fn from(value: Plan) -> Self {
        Self {
            id: value.id().get(),
            name: value.name().to_owned(),
            keyword: value.keyword().to_owned(),
            price: value.price(),
        }
    }
}

/// Search plans by name or keyword, ignoring case.
#[utoipa::path(
    get,
    path = "/plans",
    params(PlanSearchParams),
    responses(
        (status = 200, description = "Matching plans ordered by id", body = [PlanView]),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["plans"],
    operation_id = "searchPlans"
)]
#[get("/plans")]
pub async fn search_plans(
    state: Option<web::Data<HttpState>>,
    query: web::Query<PlanSearchParams>,
) -> ApiResult<web::Json<Vec<PlanView>>> {
    let state = require_state(state)?;
    let plans = state
        .reservations_query
        .search_plans(&query.into_inner().keyword)
        .await?;
    Ok(web::Json(plans.into_iter().map(PlanView::from).collect()))
}

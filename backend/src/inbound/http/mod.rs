//! HTTP inbound adapter exposing the booking REST endpoints.

pub mod error;
pub mod health;
pub mod plans;
pub mod reservations;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

use actix_web::web;
use serde::{Deserialize, Deserializer};

pub use error::ApiResult;

/// JSON extractor settings shared by every route.
///
/// Bodies are decoded whatever their `Content-Type`, and unreadable bodies
/// answer 400 in the standard error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(error::json_error_handler)
}

/// Decode a JSON `null` as the field's zero value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Register the booking routes and the JSON extractor configuration.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use booking::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(reservations::create_reservation)
        .service(reservations::list_reservations)
        .service(reservations::get_reservation)
        .service(plans::search_plans)
        .service(users::register)
        .service(users::get_user);
}

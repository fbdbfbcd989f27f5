//! Hotel booking backend: plan search, reservations and guest registration
//! over actix-web, with MySQL (Diesel) or in-memory persistence.

pub mod catalogue_seed;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;

pub mod auth;
pub mod response;
pub mod routes;

use axum::{
    Router,
    http::header::{CONTENT_TYPE, LOCATION},
    middleware::from_fn,
};
use tower_http::cors::CorsLayer;
use util::state::AppState;

/// Full application: `/api` routes plus request logging and CORS.
pub fn app(app_state: AppState) -> Router {
    let cors = CorsLayer::very_permissive().expose_headers([LOCATION, CONTENT_TYPE]);

    Router::new()
        .nest("/api", routes::routes(app_state))
        .layer(from_fn(auth::middleware::log_request))
        .layer(cors)
}

//! Router configuration for the HTTP API.

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;
use crate::state::AppState;

/// Creates the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS: the booking frontend is served from another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/api/reservations",
            get(handlers::list_reservations).post(handlers::create_reservation),
        )
        .route("/api/reservations/{id}", get(handlers::get_reservation))
        .route(
            "/api/calendar/available-dates",
            get(handlers::available_dates),
        )
        .layer(cors)
        .with_state(state)
}

//! Route definitions for the Roomly HTTP API.
//!
//! Routes are organized by domain; the router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state);

    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(room_routes())
        .merge(booking_routes())
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: register, login, refresh
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
}

/// User endpoints: admin creation, own bookings
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", post(handlers::user::create_user))
        .route("/user/booking", get(handlers::user::list_user_bookings))
}

/// Meeting room CRUD
fn room_routes() -> Router<AppState> {
    Router::new()
        .route("/meeting-room", post(handlers::room::create_room))
        .route("/meeting-room", get(handlers::room::list_rooms))
        .route("/meeting-room/{id}", put(handlers::room::update_room))
        .route("/meeting-room/{id}", delete(handlers::room::delete_room))
}

/// Booking CRUD
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/booking", post(handlers::booking::create_booking))
        .route("/booking", get(handlers::booking::list_bookings))
        .route("/booking/{id}", put(handlers::booking::update_booking))
        .route("/booking/{id}", delete(handlers::booking::delete_booking))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors
}

//! Health check handler.

use axum::extract::State;
use axum::Json;

use roomly_core::error::AppError;
use roomly_database::connection;

use crate::dto::response::ApiMessage;
use crate::state::AppState;

/// GET /health — database connectivity probe, no auth required.
pub async fn health_check(State(state): State<AppState>) -> Result<Json<ApiMessage>, AppError> {
    connection::health_check(&state.db_pool).await?;
    Ok(Json(ApiMessage::ok("ok")))
}

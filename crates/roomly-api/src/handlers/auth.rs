//! Auth handlers — register, login, refresh.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use roomly_core::error::AppError;
use roomly_entity::user::model::CreateUser;
use roomly_entity::user::UserRole;

use crate::dto::request::{LoginRequest, RefreshRequest, RegisterRequest};
use crate::dto::response::{ApiMessage, LoginResponse, RefreshResponse};
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiMessage>), AppError> {
    if state.user_repo.email_exists(&req.email).await? {
        return Err(AppError::field_validation(
            "email",
            "Email is already registered",
        ));
    }

    let password_hash = state.password_hasher.hash(&req.password)?;

    state
        .user_repo
        .create(&CreateUser {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password_hash,
            role: UserRole::User,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiMessage::ok("User registered successfully")),
    ))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (tokens, _user) = state.session_manager.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        status: "success",
        message: "Login successful",
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
    }))
}

/// POST /auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RefreshRequest>,
) -> Result<Json<RefreshResponse>, AppError> {
    let access_token = state.session_manager.refresh(&req.refresh_token).await?;

    Ok(Json(RefreshResponse {
        status: "success",
        access_token,
    }))
}

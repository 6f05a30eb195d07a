//! User handlers — admin user creation and the caller's booking list.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use roomly_core::error::AppError;
use roomly_entity::user::model::CreateUser;
use roomly_entity::user::UserRole;

use crate::dto::request::CreateUserRequest;
use crate::dto::response::{ApiMessage, DataResponse, UserBookingItem};
use crate::extractors::{AdminUser, AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /user — admin-only user creation with an optional role.
pub async fn create_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiMessage>), AppError> {
    let role = match req.role.as_deref() {
        Some(role) => role.parse::<UserRole>()?,
        None => UserRole::User,
    };

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
            role,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiMessage::ok("User created successfully")),
    ))
}

/// GET /user/booking — the caller's bookings with room names.
pub async fn list_user_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<DataResponse<Vec<UserBookingItem>>>, AppError> {
    let bookings = state.booking_repo.list_by_user(auth.id).await?;

    let items = bookings
        .into_iter()
        .map(|b| UserBookingItem {
            id: b.id,
            name: b.name,
            meeting_room_name: b.meeting_room_name,
            purpose: b.purpose,
            start_time: b.start_time,
            end_time: b.end_time,
        })
        .collect();

    Ok(Json(DataResponse::ok(items)))
}

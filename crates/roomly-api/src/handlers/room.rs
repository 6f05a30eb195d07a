//! Meeting room handlers — admin-gated CRUD over rooms and their
//! operating-hours window.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use roomly_core::error::AppError;
use roomly_entity::room::model::{CreateMeetingRoom, UpdateMeetingRoom};
use roomly_entity::room::schedule;

use crate::dto::request::{CreateRoomRequest, UpdateRoomRequest};
use crate::dto::response::{ApiMessage, DataResponse, RoomSummary};
use crate::extractors::{AdminUser, AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /meeting-room — admin only.
pub async fn create_room(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(req): ValidatedJson<CreateRoomRequest>,
) -> Result<(StatusCode, Json<ApiMessage>), AppError> {
    if state.room_repo.name_exists(&req.name, None).await? {
        return Err(AppError::field_validation(
            "name",
            "Meeting room name already exists",
        ));
    }

    schedule::validate_window(&req.open_time, &req.close_time)?;

    state
        .room_repo
        .create(&CreateMeetingRoom {
            name: req.name,
            open_time: req.open_time,
            close_time: req.close_time,
            slot_interval_minutes: req.slot_interval_minutes,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiMessage::ok("Meeting room created successfully")),
    ))
}

/// GET /meeting-room
pub async fn list_rooms(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<DataResponse<Vec<RoomSummary>>>, AppError> {
    let rooms = state.room_repo.list().await?;

    let items = rooms
        .into_iter()
        .map(|r| RoomSummary {
            id: r.id,
            name: r.name,
        })
        .collect();

    Ok(Json(DataResponse::ok(items)))
}

/// PUT /meeting-room/{id} — admin only.
///
/// The schedule-window invariant is checked over the effective pair:
/// each provided time merged over the persisted value.
pub async fn update_room(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateRoomRequest>,
) -> Result<Json<ApiMessage>, AppError> {
    let existing = state
        .room_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Meeting room not found"))?;

    if let Some(name) = &req.name {
        if state.room_repo.name_exists(name, Some(id)).await? {
            return Err(AppError::field_validation(
                "name",
                "Meeting room name already exists",
            ));
        }
    }

    schedule::validate_window_update(
        &existing.open_time,
        &existing.close_time,
        req.open_time.as_deref(),
        req.close_time.as_deref(),
    )?;

    state
        .room_repo
        .update(
            id,
            &UpdateMeetingRoom {
                name: req.name,
                open_time: req.open_time,
                close_time: req.close_time,
                slot_interval_minutes: req.slot_interval_minutes,
            },
        )
        .await?;

    Ok(Json(ApiMessage::ok("Meeting room updated successfully")))
}

/// DELETE /meeting-room/{id} — admin only.
pub async fn delete_room(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiMessage>, AppError> {
    let deleted = state.room_repo.delete(id).await?;
    if !deleted {
        return Err(AppError::not_found("Meeting room not found"));
    }

    Ok(Json(ApiMessage::ok("Meeting room deleted successfully")))
}

//! Booking handlers — CRUD scoped to the authenticated owner.
//!
//! Bookings for the same room and time range may overlap; no conflict
//! detection is performed.

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use roomly_core::error::AppError;
use roomly_entity::booking::model::{CreateBooking, UpdateBooking};

use crate::dto::request::{CreateBookingRequest, UpdateBookingRequest};
use crate::dto::response::{ApiMessage, BookingSummary, DataResponse};
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /booking
pub async fn create_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateBookingRequest>,
) -> Result<Json<ApiMessage>, AppError> {
    if state.room_repo.find_by_id(req.meeting_room_id).await?.is_none() {
        return Err(AppError::field_validation(
            "meeting_room_id",
            "Meeting room not found",
        ));
    }

    if req.end_time <= req.start_time {
        return Err(AppError::field_validation(
            "end_time",
            "end_time must be greater than start_time",
        ));
    }

    state
        .booking_repo
        .create(&CreateBooking {
            name: req.name,
            purpose: req.purpose,
            user_id: auth.id,
            meeting_room_id: req.meeting_room_id,
            start_time: req.start_time,
            end_time: req.end_time,
        })
        .await?;

    Ok(Json(ApiMessage::ok("Booking created successfully")))
}

/// GET /booking
pub async fn list_bookings(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<DataResponse<Vec<BookingSummary>>>, AppError> {
    let bookings = state.booking_repo.list().await?;

    let items = bookings
        .into_iter()
        .map(|b| BookingSummary {
            id: b.id,
            meeting_room_id: b.meeting_room_id,
            start_time: b.start_time,
            end_time: b.end_time,
        })
        .collect();

    Ok(Json(DataResponse::ok(items)))
}

/// PUT /booking/{id} — owner only.
pub async fn update_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateBookingRequest>,
) -> Result<Json<ApiMessage>, AppError> {
    if let Some(room_id) = req.meeting_room_id {
        if state.room_repo.find_by_id(room_id).await?.is_none() {
            return Err(AppError::field_validation(
                "meeting_room_id",
                "Meeting room not found",
            ));
        }
    }

    if let (Some(start), Some(end)) = (req.start_time, req.end_time) {
        if end <= start {
            return Err(AppError::field_validation(
                "end_time",
                "end_time must be greater than start_time",
            ));
        }
    }

    state
        .booking_repo
        .update_owned(
            id,
            auth.id,
            &UpdateBooking {
                name: req.name,
                purpose: req.purpose,
                meeting_room_id: req.meeting_room_id,
                start_time: req.start_time,
                end_time: req.end_time,
            },
        )
        .await?;

    Ok(Json(ApiMessage::ok("Booking updated successfully")))
}

/// DELETE /booking/{id} — owner only.
pub async fn delete_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiMessage>, AppError> {
    let deleted = state.booking_repo.delete_owned(id, auth.id).await?;
    if !deleted {
        return Err(AppError::not_found("Booking not found"));
    }

    Ok(Json(ApiMessage::ok("Booking deleted successfully")))
}

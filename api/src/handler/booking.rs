use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::id::EventId;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::booking::{BookingAcceptedResponse, CreateBookingRequest, ParticipantResponse};

/// Intake endpoint: validates and enqueues, then answers immediately.
///
/// A 202 only acknowledges that the request was queued. Whether it is
/// eventually persisted, capacity-rejected, or fails is decided later by the
/// booking processor and is not reported back to the caller.
pub async fn create_booking(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    registry.booking_queue().submit(req.into())?;

    Ok((
        StatusCode::ACCEPTED,
        Json(BookingAcceptedResponse::default()),
    ))
}

pub async fn show_participants(
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<ParticipantResponse>>> {
    registry
        .booking_repository()
        .find_participants_by_event_id(event_id)
        .await
        .map(|participants| {
            participants
                .into_iter()
                .map(ParticipantResponse::from)
                .collect::<Vec<_>>()
        })
        .map(Json)
}

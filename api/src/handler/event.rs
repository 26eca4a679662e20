use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::id::EventId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::event::{CreateEventRequest, EventResponse};

pub async fn register_event(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateEventRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    registry
        .event_repository()
        .create(req.into())
        .await
        .map(EventResponse::from)
        .map(|event| (StatusCode::CREATED, Json(event)))
}

pub async fn show_event_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<EventResponse>>> {
    registry
        .event_repository()
        .find_all()
        .await
        .map(|events| {
            events
                .into_iter()
                .map(EventResponse::from)
                .collect::<Vec<_>>()
        })
        .map(Json)
}

pub async fn show_event(
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EventResponse>> {
    registry
        .event_repository()
        .find_by_id(event_id)
        .await
        .and_then(|event| match event {
            Some(event) => Ok(Json(event.into())),
            None => Err(AppError::EntityNotFound(format!(
                "event {event_id} was not found"
            ))),
        })
}

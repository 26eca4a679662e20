use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::{
    booking::show_participants,
    event::{register_event, show_event, show_event_list},
};

pub fn build_event_routers() -> Router<AppRegistry> {
    let events_routers = Router::new()
        .route("/", post(register_event))
        .route("/", get(show_event_list))
        .route("/:event_id", get(show_event))
        .route("/:event_id/participants", get(show_participants));

    Router::new().nest("/events", events_routers)
}

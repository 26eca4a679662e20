use kernel::model::{event::Event, id::EventId};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct EventRow {
    pub id: EventId,
    pub title: String,
    pub date: String,
    pub max_participants: i32,
}

impl From<EventRow> for Event {
    fn from(value: EventRow) -> Self {
        let EventRow {
            id,
            title,
            date,
            max_participants,
        } = value;
        Event {
            id,
            title,
            date,
            max_participants,
        }
    }
}

pub mod event;

use crate::model::id::EventId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: String,
    /// Immutable seat cap; the store never holds more bookings than this.
    pub max_participants: i32,
}

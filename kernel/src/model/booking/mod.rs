pub mod event;

use chrono::{DateTime, Utc};

use crate::model::id::{BookingId, EventId, UserId};

/// A persisted admission; only the booking processor ever creates one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub event_id: EventId,
    pub user_id: UserId,
    pub booked_at: DateTime<Utc>,
}

/// One row of the participants listing for an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub booked_at: DateTime<Utc>,
}

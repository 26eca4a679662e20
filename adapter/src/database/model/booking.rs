use kernel::model::{
    booking::{Booking, Participant},
    id::{BookingId, EventId, UserId},
};
use sqlx::{
    types::chrono::{DateTime, Utc},
    FromRow,
};

#[derive(FromRow)]
pub struct BookingRow {
    pub id: BookingId,
    pub event_id: EventId,
    pub user_id: UserId,
    pub booked_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            id,
            event_id,
            user_id,
            booked_at,
        } = value;
        Booking {
            id,
            event_id,
            user_id,
            booked_at,
        }
    }
}

// One row of the bookings-users join behind the participants listing.
#[derive(FromRow)]
pub struct ParticipantRow {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub booked_at: DateTime<Utc>,
}

impl From<ParticipantRow> for Participant {
    fn from(value: ParticipantRow) -> Self {
        let ParticipantRow {
            user_id,
            name,
            email,
            booked_at,
        } = value;
        Participant {
            user_id,
            name,
            email,
            booked_at,
        }
    }
}

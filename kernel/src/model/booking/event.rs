use derive_new::new;

use crate::model::id::{EventId, UserId};

/// Queue payload: carries no identity until the processor admits it.
#[derive(new, Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub event_id: EventId,
    pub user_id: UserId,
}

use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    booking::{event::BookingRequest, Booking, Participant},
    id::EventId,
};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Admits a booking request: checks remaining capacity and inserts the
    /// booking as one transactional unit, so concurrent admissions for the
    /// same event serialize at the store.
    ///
    /// Returns `EntityNotFound` when the event does not exist and
    /// `UnprocessableEntity` when the event is fully booked.
    async fn create(&self, request: BookingRequest) -> AppResult<Booking>;

    async fn find_participants_by_event_id(
        &self,
        event_id: EventId,
    ) -> AppResult<Vec<Participant>>;
}

use std::{sync::Arc, time::Duration};

use shared::error::AppError;
use tokio::{sync::mpsc::Receiver, time::timeout};

use crate::{model::booking::event::BookingRequest, repository::booking::BookingRepository};

/// The single consumer of the admission queue.
///
/// All admission decisions and booking writes are serialized through this one
/// worker. Every outcome is terminal: a request is persisted or dropped with a
/// logged reason, never retried or re-enqueued, and no failure stops the
/// requests queued behind it. Intake has already answered 202 by the time a
/// request arrives here, so there is no client to report back to.
pub struct BookingProcessor {
    receiver: Receiver<BookingRequest>,
    repository: Arc<dyn BookingRepository>,
    store_timeout: Duration,
}

impl BookingProcessor {
    pub fn new(
        receiver: Receiver<BookingRequest>,
        repository: Arc<dyn BookingRepository>,
        store_timeout: Duration,
    ) -> Self {
        Self {
            receiver,
            repository,
            store_timeout,
        }
    }

    /// Drains the queue until every producer handle is dropped.
    ///
    /// Tests drive the processor deterministically through this: enqueue,
    /// drop the queue, await `run`, then assert on the store.
    pub async fn run(mut self) {
        while let Some(request) = self.receiver.recv().await {
            self.process(request).await;
        }
        tracing::info!("booking queue closed, shutting down processor");
    }

    async fn process(&self, request: BookingRequest) {
        let event_id = request.event_id;
        let user_id = request.user_id;

        match timeout(self.store_timeout, self.repository.create(request)).await {
            Ok(Ok(booking)) => {
                tracing::info!(%event_id, %user_id, booking_id = %booking.id, "booking persisted");
            }
            Ok(Err(AppError::EntityNotFound(message))) => {
                tracing::warn!(%event_id, %user_id, %message, "dropping booking request");
            }
            Ok(Err(AppError::UnprocessableEntity(message))) => {
                tracing::info!(%event_id, %user_id, %message, "booking rejected");
            }
            Ok(Err(err)) => {
                tracing::error!(%event_id, %user_id, error = ?err, "failed to persist booking");
            }
            Err(_) => {
                tracing::warn!(
                    %event_id,
                    %user_id,
                    timeout = ?self.store_timeout,
                    "store operation timed out, dropping booking request"
                );
            }
        }
    }
}

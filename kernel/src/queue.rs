use shared::error::{AppError, AppResult};
use tokio::sync::mpsc::{self, error::TrySendError, Receiver, Sender};

use crate::model::booking::event::BookingRequest;

/// Bounded multi-producer/single-consumer intake queue for booking requests.
///
/// The capacity is fixed at construction. Requests sit in the queue until the
/// single [`BookingProcessor`](crate::worker::BookingProcessor) dequeues them;
/// whatever is still queued when the process stops is lost.
#[derive(Clone)]
pub struct BookingQueue {
    tx: Sender<BookingRequest>,
}

impl BookingQueue {
    /// Creates the queue and hands back the consumer end, which must be given
    /// to exactly one processor.
    pub fn new(capacity: usize) -> (Self, Receiver<BookingRequest>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }

    /// Non-blocking submit: a full queue rejects the request immediately
    /// instead of making the caller wait.
    pub fn submit(&self, request: BookingRequest) -> AppResult<()> {
        self.tx.try_send(request).map_err(|err| match err {
            TrySendError::Full(_) => AppError::TooManyRequests,
            TrySendError::Closed(_) => AppError::QueueClosed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::id::{EventId, UserId};

    fn request(event: i64, user: i64) -> BookingRequest {
        BookingRequest::new(EventId::new(event), UserId::new(user))
    }

    #[tokio::test]
    async fn rejects_submissions_once_the_queue_is_full() {
        let (queue, mut rx) = BookingQueue::new(2);

        queue.submit(request(1, 1)).unwrap();
        queue.submit(request(1, 2)).unwrap();
        let overflow = queue.submit(request(1, 3));
        assert!(matches!(overflow, Err(AppError::TooManyRequests)));

        // Draining one slot makes room again.
        let first = rx.recv().await.unwrap();
        assert_eq!(first, request(1, 1));
        queue.submit(request(1, 3)).unwrap();
    }

    #[tokio::test]
    async fn reports_a_closed_queue_when_the_consumer_is_gone() {
        let (queue, rx) = BookingQueue::new(2);
        drop(rx);

        let rejected = queue.submit(request(1, 1));
        assert!(matches!(rejected, Err(AppError::QueueClosed)));
    }
}

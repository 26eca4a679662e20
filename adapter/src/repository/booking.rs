use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{event::BookingRequest, Booking, Participant},
    id::EventId,
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::booking::{BookingRow, ParticipantRow},
    ConnectionPool,
};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, request: BookingRequest) -> AppResult<Booking> {
        let mut tx = self.db.begin().await?;

        // Capacity check before the insert, inside one transaction:
        // - does the referenced event exist?
        // - is there still a free seat?
        //
        // The FOR UPDATE lock on the event row serializes concurrent
        // admissions for the same event, so the count below cannot change
        // between the check and the insert. Returning early drops the
        // transaction and rolls back.
        {
            let max_participants = sqlx::query_scalar::<_, i32>(
                r#"
                    SELECT max_participants
                    FROM events
                    WHERE id = $1
                    FOR UPDATE
                "#,
            )
            .bind(request.event_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            let Some(max_participants) = max_participants else {
                return Err(AppError::EntityNotFound(format!(
                    "event {} was not found",
                    request.event_id
                )));
            };

            let booked = sqlx::query_scalar::<_, i64>(
                r#"
                    SELECT COUNT(*)
                    FROM bookings
                    WHERE event_id = $1
                "#,
            )
            .bind(request.event_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if booked >= i64::from(max_participants) {
                return Err(AppError::UnprocessableEntity(format!(
                    "event {} is fully booked (max: {max_participants})",
                    request.event_id
                )));
            }
        }

        let row = sqlx::query_as::<_, BookingRow>(
            r#"
                INSERT INTO bookings (event_id, user_id)
                VALUES ($1, $2)
                RETURNING id, event_id, user_id, booked_at
            "#,
        )
        .bind(request.event_id)
        .bind(request.user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(row.into())
    }

    async fn find_participants_by_event_id(
        &self,
        event_id: EventId,
    ) -> AppResult<Vec<Participant>> {
        let rows = sqlx::query_as::<_, ParticipantRow>(
            r#"
                SELECT u.id AS user_id, u.name, u.email, b.booked_at
                FROM bookings AS b
                INNER JOIN users AS u ON b.user_id = u.id
                WHERE b.event_id = $1
                ORDER BY b.booked_at DESC
            "#,
        )
        .bind(event_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Participant::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use kernel::model::id::UserId;

    use super::*;

    async fn seed_event(
        pool: &sqlx::PgPool,
        title: &str,
        date: &str,
        max_participants: i32,
    ) -> anyhow::Result<EventId> {
        let id = sqlx::query_scalar::<_, EventId>(
            "INSERT INTO events (title, date, max_participants) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(title)
        .bind(date)
        .bind(max_participants)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    async fn seed_user(pool: &sqlx::PgPool, name: &str, email: &str) -> anyhow::Result<UserId> {
        let id = sqlx::query_scalar::<_, UserId>(
            "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id",
        )
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    async fn count_bookings(pool: &sqlx::PgPool, event_id: EventId) -> anyhow::Result<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bookings WHERE event_id = $1")
                .bind(event_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn enforces_the_event_capacity(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let event_id = seed_event(&pool, "Rust Meetup", "2025-09-01", 1).await?;
        let alice = seed_user(&pool, "Alice", "alice@example.com").await?;
        let bob = seed_user(&pool, "Bob", "bob@example.com").await?;

        let admitted = repo.create(BookingRequest::new(event_id, alice)).await?;
        assert_eq!(admitted.event_id, event_id);
        assert_eq!(admitted.user_id, alice);

        let rejected = repo.create(BookingRequest::new(event_id, bob)).await;
        assert!(matches!(rejected, Err(AppError::UnprocessableEntity(_))));

        assert_eq!(count_bookings(&pool, event_id).await?, 1);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn concurrent_admissions_cannot_overbook(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let event_id = seed_event(&pool, "Rust Meetup", "2025-09-01", 1).await?;
        let alice = seed_user(&pool, "Alice", "alice@example.com").await?;
        let bob = seed_user(&pool, "Bob", "bob@example.com").await?;

        let (first, second) = tokio::join!(
            repo.create(BookingRequest::new(event_id, alice)),
            repo.create(BookingRequest::new(event_id, bob)),
        );

        // Whichever transaction takes the event row lock first wins the seat.
        assert!(first.is_ok() != second.is_ok());
        assert_eq!(count_bookings(&pool, event_id).await?, 1);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn rejects_requests_for_missing_events(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let alice = seed_user(&pool, "Alice", "alice@example.com").await?;

        let rejected = repo
            .create(BookingRequest::new(EventId::new(4040), alice))
            .await;
        assert!(matches!(rejected, Err(AppError::EntityNotFound(_))));

        assert_eq!(count_bookings(&pool, EventId::new(4040)).await?, 0);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn lists_participants_most_recent_first(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let event_id = seed_event(&pool, "Rust Meetup", "2025-09-01", 5).await?;
        let alice = seed_user(&pool, "Alice", "alice@example.com").await?;
        let bob = seed_user(&pool, "Bob", "bob@example.com").await?;

        repo.create(BookingRequest::new(event_id, alice)).await?;
        repo.create(BookingRequest::new(event_id, bob)).await?;

        let participants = repo.find_participants_by_event_id(event_id).await?;
        assert_eq!(participants.len(), 2);
        // Bob booked last, so he is listed first.
        assert_eq!(participants[0].user_id, bob);
        assert_eq!(participants[0].name, "Bob");
        assert_eq!(participants[1].user_id, alice);
        assert!(participants[0].booked_at >= participants[1].booked_at);
        Ok(())
    }
}

use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    event::{event::CreateEvent, Event},
    id::EventId,
};
use kernel::repository::event::EventRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::event::EventRow, ConnectionPool};

#[derive(new)]
pub struct EventRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EventRepository for EventRepositoryImpl {
    async fn create(&self, event: CreateEvent) -> AppResult<Event> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
                INSERT INTO events (title, date, max_participants)
                VALUES ($1, $2, $3)
                RETURNING id, title, date, max_participants
            "#,
        )
        .bind(event.title)
        .bind(event.date)
        .bind(event.max_participants)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.into())
    }

    async fn find_all(&self) -> AppResult<Vec<Event>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
                SELECT id, title, date, max_participants
                FROM events
                ORDER BY date
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
                SELECT id, title, date, max_participants
                FROM events
                WHERE id = $1
            "#,
        )
        .bind(event_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Event::from))
    }
}

use std::sync::Arc;

use adapter::{
    database::ConnectionPool,
    repository::{
        booking::BookingRepositoryImpl, event::EventRepositoryImpl,
        health::HealthCheckRepositoryImpl, user::UserRepositoryImpl,
    },
};
use kernel::{
    queue::BookingQueue,
    repository::{
        booking::BookingRepository, event::EventRepository, health::HealthCheckRepository,
        user::UserRepository,
    },
};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    event_repository: Arc<dyn EventRepository>,
    user_repository: Arc<dyn UserRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    booking_queue: BookingQueue,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, booking_queue: BookingQueue) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let event_repository = Arc::new(EventRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        Self {
            health_check_repository,
            event_repository,
            user_repository,
            booking_repository,
            booking_queue,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn event_repository(&self) -> Arc<dyn EventRepository> {
        self.event_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn booking_queue(&self) -> BookingQueue {
        self.booking_queue.clone()
    }
}

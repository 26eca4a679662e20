use std::time::Duration;

use anyhow::{Context, Result};

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub booking: BookingConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env_or("DATABASE_HOST", "localhost"),
            port: env_or("DATABASE_PORT", "5432")
                .parse()
                .context("DATABASE_PORT must be a port number")?,
            username: env_or("DATABASE_USERNAME", "app"),
            password: env_or("DATABASE_PASSWORD", "passwd"),
            database: env_or("DATABASE_NAME", "app"),
        };
        let server = ServerConfig {
            port: env_or("PORT", "8080")
                .parse()
                .context("PORT must be a port number")?,
        };
        let booking = BookingConfig {
            queue_capacity: env_or("BOOKING_QUEUE_CAPACITY", "10")
                .parse()
                .context("BOOKING_QUEUE_CAPACITY must be a positive integer")?,
            store_timeout: Duration::from_secs(
                env_or("BOOKING_STORE_TIMEOUT_SECS", "5")
                    .parse()
                    .context("BOOKING_STORE_TIMEOUT_SECS must be a number of seconds")?,
            ),
        };
        Ok(Self {
            database,
            server,
            booking,
        })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct ServerConfig {
    pub port: u16,
}

pub struct BookingConfig {
    /// Fixed size of the admission queue; never resized after startup.
    pub queue_capacity: usize,
    /// Per-request deadline for store round-trips made by the processor.
    pub store_timeout: Duration,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_the_default_when_the_variable_is_unset() {
        assert_eq!(env_or("EVENT_BOOKING_NO_SUCH_VAR", "8080"), "8080");
    }
}

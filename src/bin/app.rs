use std::net::{Ipv4Addr, SocketAddr};

use adapter::database::connect_database_with;
use anyhow::{Context, Result};
use api::route::{
    booking::build_booking_routers, event::build_event_routers,
    health::build_health_check_routers, user::build_user_routers,
};
use axum::Router;
use kernel::{queue::BookingQueue, worker::BookingProcessor};
use registry::AppRegistry;
use shared::config::AppConfig;
use shared::env::{which, Environment};
use tokio::net::TcpListener;
use tokio::time::timeout;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger()?;
    bootstrap().await
}

fn init_logger() -> Result<()> {
    let log_level = match which() {
        Environment::Development => "debug",
        Environment::Production => "info",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| log_level.into());

    let subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(subscriber)
        .with(env_filter)
        .try_init()?;

    Ok(())
}

async fn bootstrap() -> Result<()> {
    let app_config = AppConfig::new()?;
    let pool = connect_database_with(&app_config.database);

    let (booking_queue, booking_receiver) = BookingQueue::new(app_config.booking.queue_capacity);
    let registry = AppRegistry::new(pool, booking_queue);

    // The pool connects lazily; fail fast here if the store is unreachable.
    let reachable = timeout(
        app_config.booking.store_timeout,
        registry.health_check_repository().check_db(),
    )
    .await
    .context("initial database connectivity check timed out")?;
    anyhow::ensure!(reachable, "initial database connectivity check failed");
    tracing::info!("connected to the database");

    let processor = BookingProcessor::new(
        booking_receiver,
        registry.booking_repository(),
        app_config.booking.store_timeout,
    );
    tokio::spawn(processor.run());

    let app = Router::new()
        .merge(build_health_check_routers())
        .merge(build_event_routers())
        .merge(build_user_routers())
        .merge(build_booking_routers())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .with_state(registry);

    let addr = SocketAddr::new(Ipv4Addr::UNSPECIFIED.into(), app_config.server.port);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app)
        .await
        .context("Unexpected error happened in server")
        .inspect_err(|e| {
            tracing::error!(
                error.cause_chain = ?e,error.message = %e, "Unexpected error"
            )
        })
}

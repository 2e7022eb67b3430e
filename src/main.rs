use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deadlink_web::config::app::AppConfig;
use deadlink_web::context::AppContext;
use deadlink_web::stream::emitter::EventEmitter;
use deadlink_web::stream::kinesis::KinesisRecordSink;
use deadlink_web::stream::partition::PartitionKeySource;
use deadlink_web::time::system_clock::SystemClock;
use deadlink_web::web::router::app_router;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env();

    // JSON log lines on stdout, level taken from RUST_LOG (default info).
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    if !config.stream.is_valid() {
        warn!(
            stream = %config.stream.name,
            region = %config.stream.region,
            "stream configuration incomplete; events will not be deliverable"
        );
    }

    let sink = Arc::new(KinesisRecordSink::connect(&config.stream).await);
    let emitter = EventEmitter::new(sink, PartitionKeySource::seeded_from_clock());
    let ctx = Arc::new(AppContext::new(emitter, Arc::new(SystemClock::new())));

    let addr = config.http.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("cannot bind {addr}"))?;
    info!(%addr, "listening");

    // Runs until the process is killed; in-flight emissions are abandoned.
    axum::serve(listener, app_router(ctx))
        .await
        .context("server error")?;

    Ok(())
}

use student_directory::config::Config;
use student_directory::directory::handlers::router;
use student_directory::directory::memory::{MemoryStore, seed_records};
use student_directory::directory::service::DirectoryService;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    // 1. Storage, seeded once at startup:
    let store = Arc::new(MemoryStore::with_students(seed_records()?));
    let service = Arc::new(DirectoryService::new(store, config.view_range));
    tracing::info!(
        "Directory seeded with {} student(s), viewable ids in ({}, {})",
        service.student_count(),
        config.view_range.gt(),
        config.view_range.lt()
    );

    // 2. HTTP Router:
    let app = router(service.clone());

    // 3. Spawn stats reporter:
    if let Some(period) = config.stats_interval {
        let stats_service = service.clone();
        tokio::spawn(async move {
            report_stats(stats_service, period).await;
        });
    }

    // 4. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn report_stats(service: Arc<DirectoryService>, period: Duration) {
    let mut interval = tokio::time::interval(period);
    loop {
        interval.tick().await;
        tracing::info!("Directory stats: {} students", service.student_count());
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

use axum::{
    routing::{get, post},
    Extension, Router,
};
use batchly::executor::handlers::handle_queue_snapshot;
use batchly::executor::processor::BatchProcessor;
use batchly::executor::queue::JobQueue;
use batchly::ingestion::handlers::{handle_ingest, handle_status};
use batchly::ingestion::service::IngestionService;
use batchly::storage::memory::IngestionStore;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:5000".parse()?;
    let mut batch_delay = Duration::from_millis(5000);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--batch-delay-ms" => {
                batch_delay = Duration::from_millis(args[i + 1].parse()?);
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: {} [--bind <addr:port>] [--batch-delay-ms <n>]",
                    args[0]
                );
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Shared state:
    let store = Arc::new(IngestionStore::new());
    let queue = Arc::new(JobQueue::new());

    // 2. Worker (started on demand by submissions):
    let processor = BatchProcessor::with_fixed_delay(queue.clone(), store.clone(), batch_delay);

    let service = Arc::new(IngestionService::new(store, queue.clone(), processor));

    // 3. HTTP Router:
    let app = Router::new()
        .route("/", get(handle_queue_snapshot))
        .route("/ingest", post(handle_ingest))
        .route("/status/:ingestion_id", get(handle_status))
        .layer(Extension(service))
        .layer(Extension(queue));

    tracing::info!("Server running on {}", bind_addr);
    tracing::info!("Batch processing delay: {:?}", batch_delay);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use work_orders::modules::work_orders::core::example_data::WorkOrderExampleBuilder;
use work_orders::modules::work_orders::core::work_order::WorkOrder;
use work_orders::shared::inbound::translator::RecordTranslator;
use work_orders::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use work_orders::shell::config::AppConfig;
use work_orders::shell::http::router;
use work_orders::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // In-memory store for now
    let store = Arc::new(InMemoryRecordStore::<WorkOrder>::with_options(config.store));
    if config.seed_examples {
        WorkOrderExampleBuilder::new(chrono::Local::now().date_naive())
            .build(&store)
            .await?;
    }

    let state = AppState {
        work_orders: Arc::new(RecordTranslator::<WorkOrder>::new(store)),
    };

    tracing::info!("Work order endpoints: http://{}/WorkOrder", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}

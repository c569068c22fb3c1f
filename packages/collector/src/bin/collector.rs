// Entry point: provision the store, run one ingestion pass, open the menu.

use anyhow::{Context, Result};
use collector_core::db;
use collector_core::ingest::IngestionWorkflow;
use collector_core::listing::HhListingApi;
use collector_core::menu;
use collector_core::reports::Reports;
use collector_core::Config;
use hh_client::HhClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,collector_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting vacancy collector");

    // The only fatal configuration error: missing credentials must stop the
    // process before anything talks to the network.
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(employers = config.employer_ids.len(), "Configuration loaded");

    let Some(pool) = db::provision(&config).await else {
        tracing::error!("Store is unavailable, nothing to do");
        return Ok(());
    };

    let client = match &config.hh_base_url {
        Some(base) => HhClient::with_base_url(base.clone()),
        None => HhClient::new(),
    };
    let api = HhListingApi::new(client, config.max_vacancies_per_employer);

    let workflow = IngestionWorkflow::new(&api, &pool, &config.employer_ids);
    let stats = workflow.run().await;
    tracing::info!(
        employers_inserted = stats.employers_inserted,
        vacancies_inserted = stats.vacancies_inserted,
        "Store is up to date"
    );

    let reports = Reports::new(pool);
    menu::run(&reports).await?;

    Ok(())
}

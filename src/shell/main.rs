use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use cinema_tickets::modules::catalogue::use_cases::seed_catalogue::command::load_seed_document;
use cinema_tickets::modules::catalogue::use_cases::seed_catalogue::handler::SeedCatalogueHandler;
use cinema_tickets::shared::infrastructure::entity_store::in_memory::InMemoryEntityStore;
use cinema_tickets::shared::infrastructure::location_provider::fixed::FixedLocationProvider;
use cinema_tickets::shell::config::AppConfig;
use cinema_tickets::shell::state::AppState;
use cinema_tickets::shell::{graphql, http};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env();
    let store = Arc::new(InMemoryEntityStore::new());

    if let Some(path) = &config.seed_file {
        let document = load_seed_document(path).await?;
        let report = SeedCatalogueHandler::new(store.clone())
            .handle(document)
            .await?;
        tracing::info!(
            movies = report.movies,
            cinemas = report.cinemas,
            screenings = report.screenings,
            "seeded catalogue from {}",
            path.display()
        );
    }

    if config.home_position.is_none() {
        tracing::warn!("no position configured, proximity search will report location unavailable");
    }
    let location = Arc::new(FixedLocationProvider::new(config.home_position));
    let state = AppState::new(store, location, &config);

    let app = http::router(state.clone())
        .merge(graphql::router(graphql::schema(state)))
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("REST endpoints and GraphQL at http://{}/gql", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

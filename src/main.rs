use std::sync::Arc;

use movie_recs_api::{
    config::Config,
    routes::{create_router, AppState},
    services::{CatalogClient, HttpRecommender, RecommendationEnricher, TmdbPosterProvider},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_recs_api=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;

    // One client shared by all outbound calls
    let http_client = reqwest::Client::new();

    let catalog = CatalogClient::new(http_client.clone(), config.catalog_api_url.clone());
    let recommender = HttpRecommender::new(
        http_client.clone(),
        config.recommendation_api_url.clone(),
    );
    let posters = TmdbPosterProvider::new(
        http_client,
        config.tmdb_api_key.clone(),
        config.tmdb_api_url.clone(),
    );

    let enricher = RecommendationEnricher::new(
        Arc::new(recommender),
        Arc::new(posters),
        config.tmdb_image_base_url.clone(),
    );

    let state = AppState {
        catalog: Arc::new(catalog),
        enricher: Arc::new(enricher),
    };

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}

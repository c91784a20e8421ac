use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod movies;
pub mod recommendations;

use crate::{
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::{CatalogSource, RecommendationEnricher},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogSource>,
    pub enricher: Arc<RecommendationEnricher>,
}

/// Creates the application router with all routes
///
/// CORS is permissive because the UI is served from a different origin.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/movies", get(movies::list))
        .route("/recommend", post(recommendations::recommend))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::MockCatalogSource;
    use crate::services::posters::MockPosterProvider;
    use crate::services::recommender::MockRecommendationSource;
    use axum_test::TestServer;

    fn test_server(catalog: MockCatalogSource) -> TestServer {
        // The enricher is unused by the catalog route; bare mocks suffice.
        let enricher = RecommendationEnricher::new(
            Arc::new(MockRecommendationSource::new()),
            Arc::new(MockPosterProvider::new()),
            "https://image.tmdb.org/t/p/w500".to_string(),
        );

        let state = AppState {
            catalog: Arc::new(catalog),
            enricher: Arc::new(enricher),
        };

        TestServer::new(create_router(state)).unwrap()
    }

    #[tokio::test]
    async fn test_movies_passes_catalog_through_in_order() {
        let mut catalog = MockCatalogSource::new();
        catalog.expect_list_movies().returning(|| {
            Ok(vec![
                "Inception".to_string(),
                "Heat".to_string(),
                "Alien".to_string(),
            ])
        });

        let server = test_server(catalog);
        let response = server.get("/movies").await;

        response.assert_status_ok();
        let movies: Vec<String> = response.json();
        assert_eq!(movies, ["Inception", "Heat", "Alien"]);
    }

    #[tokio::test]
    async fn test_movies_maps_catalog_error_to_bad_gateway() {
        let mut catalog = MockCatalogSource::new();
        catalog.expect_list_movies().returning(|| {
            Err(crate::error::AppError::ExternalApi(
                "Catalog returned status 500".to_string(),
            ))
        });

        let server = test_server(catalog);
        let response = server.get("/movies").await;

        response.assert_status(StatusCode::BAD_GATEWAY);
    }
}

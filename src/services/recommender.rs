use reqwest::Client as HttpClient;
use serde_json::json;

#[cfg(test)]
use mockall::automock;

use crate::{
    error::{AppError, AppResult},
    models::RecommendationRecord,
};

/// Source of similar-movie recommendations
///
/// Any failure here (network, non-success status, malformed body) is fatal
/// to the enrichment attempt that issued it.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait RecommendationSource: Send + Sync {
    /// Fetch the ranked recommendation list for a selected title
    async fn similar_to(&self, movie: &str) -> AppResult<Vec<RecommendationRecord>>;
}

/// Recommendation backend reached over HTTP
#[derive(Clone)]
pub struct HttpRecommender {
    http_client: HttpClient,
    api_url: String,
}

impl HttpRecommender {
    pub fn new(http_client: HttpClient, api_url: String) -> Self {
        Self {
            http_client,
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl RecommendationSource for HttpRecommender {
    async fn similar_to(&self, movie: &str) -> AppResult<Vec<RecommendationRecord>> {
        let url = format!("{}/recommend", self.api_url);

        let response = self
            .http_client
            .post(&url)
            .json(&json!({ "movie": movie }))
            .send()
            .await
            .map_err(|e| AppError::RecommendationService(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::RecommendationService(format!(
                "Recommendation service returned status {}: {}",
                status, body
            )));
        }

        let records: Vec<RecommendationRecord> = response.json().await.map_err(|e| {
            AppError::RecommendationService(format!("Malformed recommendation response: {}", e))
        })?;

        tracing::info!(
            movie = %movie,
            results = records.len(),
            "Recommendations fetched"
        );

        Ok(records)
    }
}

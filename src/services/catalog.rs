use reqwest::Client as HttpClient;

#[cfg(test)]
use mockall::automock;

use crate::{
    error::{AppError, AppResult},
    models::MovieTitle,
};

/// Source of the selectable movie-title catalog
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full ordered list of selectable titles
    async fn list_movies(&self) -> AppResult<Vec<MovieTitle>>;
}

/// Thin proxy client for the movie-title catalog
#[derive(Clone)]
pub struct CatalogClient {
    http_client: HttpClient,
    api_url: String,
}

impl CatalogClient {
    pub fn new(http_client: HttpClient, api_url: String) -> Self {
        Self {
            http_client,
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl CatalogSource for CatalogClient {
    async fn list_movies(&self) -> AppResult<Vec<MovieTitle>> {
        let url = format!("{}/movies", self.api_url);

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Catalog returned status {}: {}",
                status, body
            )));
        }

        let movies: Vec<MovieTitle> = response.json().await?;

        tracing::info!(count = movies.len(), "Catalog fetched");

        Ok(movies)
    }
}

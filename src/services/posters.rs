use reqwest::Client as HttpClient;

#[cfg(test)]
use mockall::automock;

use crate::{
    error::{AppError, AppResult},
    models::MovieDetails,
};

const TMDB_LANGUAGE: &str = "en-US";

/// Poster-metadata lookup, keyed by the recommendation record's movie id
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PosterProvider: Send + Sync {
    /// Look up the relative poster path for a movie id.
    ///
    /// `Ok(None)` means the metadata service answered but carries no poster.
    /// Callers decide how to degrade on `Err`; this provider never retries.
    async fn poster_path(&self, movie_id: u64) -> AppResult<Option<String>>;
}

/// TMDB-backed poster provider
#[derive(Clone)]
pub struct TmdbPosterProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbPosterProvider {
    pub fn new(http_client: HttpClient, api_key: String, api_url: String) -> Self {
        Self {
            http_client,
            api_key,
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl PosterProvider for TmdbPosterProvider {
    async fn poster_path(&self, movie_id: u64) -> AppResult<Option<String>> {
        let url = format!("{}/movie/{}", self.api_url, movie_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", TMDB_LANGUAGE),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB returned status {} for movie {}: {}",
                status, movie_id, body
            )));
        }

        let details: MovieDetails = response.json().await?;

        tracing::debug!(
            movie_id = movie_id,
            has_poster = details.poster_path.is_some(),
            "Poster metadata fetched"
        );

        Ok(details.poster_path)
    }
}

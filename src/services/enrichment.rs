use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use crate::{
    error::{AppError, AppResult},
    models::EnrichedRecommendation,
    services::{posters::PosterProvider, recommender::RecommendationSource},
};

/// Hands out tickets for enrichment runs. A ticket goes stale the moment
/// a newer run begins, so at most one run is authoritative at a time.
#[derive(Debug, Default)]
struct Generation {
    counter: AtomicU64,
}

impl Generation {
    fn begin(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.counter.load(Ordering::SeqCst) == ticket
    }
}

/// Turns a selected title into an ordered list of recommendations with
/// resolved poster URLs.
///
/// The recommendation fetch is all-or-nothing; poster lookups fan out
/// concurrently and each failure degrades only its own record.
pub struct RecommendationEnricher {
    recommender: Arc<dyn RecommendationSource>,
    posters: Arc<dyn PosterProvider>,
    image_base_url: String,
    generation: Generation,
}

impl RecommendationEnricher {
    pub fn new(
        recommender: Arc<dyn RecommendationSource>,
        posters: Arc<dyn PosterProvider>,
        image_base_url: String,
    ) -> Self {
        Self {
            recommender,
            posters,
            image_base_url,
            generation: Generation::default(),
        }
    }

    /// Fetch recommendations for `movie` and resolve a poster for each.
    ///
    /// Returns the enriched list in the exact order the recommendation
    /// service produced, one output record per input record. Fails with
    /// `RecommendationService` if the initial fetch fails, and with
    /// `Superseded` if a newer enrichment began before this one settled.
    pub async fn enrich(&self, movie: &str) -> AppResult<Vec<EnrichedRecommendation>> {
        let ticket = self.generation.begin();

        let records = self.recommender.similar_to(movie).await?;

        tracing::info!(movie = %movie, count = records.len(), "Resolving posters");

        // One task per record; output order follows `records`, never
        // completion order.
        let mut tasks = Vec::with_capacity(records.len());
        for record in &records {
            let posters = Arc::clone(&self.posters);
            let movie_id = record.movie_id;
            tasks.push(tokio::spawn(
                async move { posters.poster_path(movie_id).await },
            ));
        }

        let mut enriched = Vec::with_capacity(records.len());
        for (record, task) in records.into_iter().zip(tasks) {
            let poster_url = match task.await {
                Ok(Ok(Some(path))) => Some(self.image_url(&path)),
                Ok(Ok(None)) => {
                    tracing::debug!(movie_id = record.movie_id, "No poster path in metadata");
                    None
                }
                Ok(Err(e)) => {
                    tracing::warn!(
                        movie_id = record.movie_id,
                        error = %e,
                        "Poster lookup failed"
                    );
                    None
                }
                Err(e) => {
                    tracing::warn!(
                        movie_id = record.movie_id,
                        error = %e,
                        "Poster task join error"
                    );
                    None
                }
            };
            enriched.push(EnrichedRecommendation::new(record, poster_url));
        }

        if !self.generation.is_current(ticket) {
            tracing::info!(movie = %movie, "Enrichment superseded by a newer request");
            return Err(AppError::Superseded);
        }

        Ok(enriched)
    }

    fn image_url(&self, poster_path: &str) -> String {
        format!(
            "{}/{}",
            self.image_base_url.trim_end_matches('/'),
            poster_path.trim_start_matches('/')
        )
    }
}

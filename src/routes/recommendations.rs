use axum::{extract::State, Json};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{EnrichedRecommendation, MovieTitle},
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub movie: MovieTitle,
}

/// Handler for the recommendations endpoint
///
/// Selection validity ends here: a blank title is rejected before the
/// enricher is invoked.
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<Vec<EnrichedRecommendation>>> {
    if request.movie.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Movie title cannot be empty".to_string(),
        ));
    }

    let recommendations = state.enricher.enrich(&request.movie).await?;
    Ok(Json(recommendations))
}

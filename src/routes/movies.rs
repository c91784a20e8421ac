use axum::{extract::State, Json};

use crate::{error::AppResult, models::MovieTitle, services::CatalogSource};

use super::AppState;

/// Handler for the catalog endpoint
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MovieTitle>>> {
    let movies = state.catalog.list_movies().await?;
    Ok(Json(movies))
}

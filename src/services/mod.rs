pub mod catalog;
pub mod enrichment;
pub mod posters;
pub mod recommender;

pub use catalog::{CatalogClient, CatalogSource};
pub use enrichment::RecommendationEnricher;
pub use posters::{PosterProvider, TmdbPosterProvider};
pub use recommender::{HttpRecommender, RecommendationSource};

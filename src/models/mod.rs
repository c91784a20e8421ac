use serde::{Deserialize, Serialize};

/// Opaque catalog key for a movie. Doubles as the request parameter
/// sent to the recommendation service.
pub type MovieTitle = String;

/// One entry in the recommendation service response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationRecord {
    /// Display name of the recommended movie
    pub title: String,
    /// Key used to query poster metadata
    pub movie_id: u64,
}

/// A recommendation with its resolved poster, the unit returned to the client.
///
/// `poster_url` is `None` when poster resolution failed or the metadata
/// carried no poster; the record itself is never dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrichedRecommendation {
    pub title: String,
    pub movie_id: u64,
    pub poster_url: Option<String>,
}

impl EnrichedRecommendation {
    pub fn new(record: RecommendationRecord, poster_url: Option<String>) -> Self {
        Self {
            title: record.title,
            movie_id: record.movie_id,
            poster_url,
        }
    }
}

/// TMDB movie details, reduced to the fields we read
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetails {
    #[serde(default)]
    pub poster_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_record_deserialization() {
        let json = r#"{"title":"Interstellar","movie_id":157336}"#;
        let record: RecommendationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "Interstellar");
        assert_eq!(record.movie_id, 157336);
    }

    #[test]
    fn test_enriched_recommendation_serializes_absent_poster_as_null() {
        let enriched = EnrichedRecommendation::new(
            RecommendationRecord {
                title: "The Prestige".to_string(),
                movie_id: 1124,
            },
            None,
        );

        let json = serde_json::to_value(&enriched).unwrap();
        assert_eq!(json["title"], "The Prestige");
        assert_eq!(json["movie_id"], 1124);
        assert!(json["poster_url"].is_null());
    }

    #[test]
    fn test_enriched_recommendation_keeps_record_fields() {
        let enriched = EnrichedRecommendation::new(
            RecommendationRecord {
                title: "Interstellar".to_string(),
                movie_id: 157336,
            },
            Some("https://image.tmdb.org/t/p/w500/abc.jpg".to_string()),
        );

        assert_eq!(enriched.title, "Interstellar");
        assert_eq!(enriched.movie_id, 157336);
        assert_eq!(
            enriched.poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
    }

    #[test]
    fn test_movie_details_without_poster_path() {
        let json = r#"{"id":1124,"title":"The Prestige"}"#;
        let details: MovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.poster_path, None);
    }

    #[test]
    fn test_movie_details_with_poster_path() {
        let json = r#"{"id":157336,"poster_path":"/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg"}"#;
        let details: MovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(
            details.poster_path.as_deref(),
            Some("/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg")
        );
    }
}

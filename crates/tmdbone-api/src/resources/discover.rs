//! `discover/*` endpoints.

use serde_json::Value;

use super::Resource;
use crate::api::LocalTmdbApi;
use crate::error::Result;
use crate::params::Params;

/// Filtered discovery of movies and TV series.
///
/// Filters (`with_genres`, `sort_by`, `primary_release_year`, ...) are
/// passed through `Params` unchanged.
#[derive(Debug)]
pub struct Discover<'a, A> {
    inner: Resource<'a, A>,
}

#[allow(clippy::missing_errors_doc)]
impl<'a, A: LocalTmdbApi> Discover<'a, A> {
    /// Binds `discover` to `api`.
    pub fn new(api: &'a A) -> Self {
        Self {
            inner: Resource::new(api, &[&"discover"]),
        }
    }

    /// Discover movies.
    pub async fn movie(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/movie", params).await
    }

    /// Discover TV series.
    pub async fn tv(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/tv", params).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::resources::mock::{RecordingApi, pair};

    #[tokio::test]
    async fn test_discover_passes_filters() {
        // Arrange
        let api = RecordingApi::default();
        let discover = Discover::new(&api);

        // Act
        discover
            .movie(
                Params::new()
                    .set("with_genres", vec![16, 10_751])
                    .set("sort_by", "popularity.desc")
                    .set("include_adult", false),
            )
            .await
            .unwrap();
        discover.tv(Params::new()).await.unwrap();

        // Assert
        assert_eq!(api.paths(), vec!["discover/movie", "discover/tv"]);
        assert!(api.last().1.is_empty());
    }

    #[tokio::test]
    async fn test_discover_query_serialization() {
        // Arrange
        let api = RecordingApi::default();

        // Act
        Discover::new(&api)
            .movie(
                Params::new()
                    .set("with_genres", vec![16, 10_751])
                    .set("include_adult", false),
            )
            .await
            .unwrap();

        // Assert
        assert_eq!(
            api.last().1,
            vec![pair("include_adult", "false"), pair("with_genres", "16,10751")]
        );
    }
}

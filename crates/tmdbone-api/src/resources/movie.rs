//! `movie/{movie_id}` endpoints.

use serde_json::Value;

use super::Resource;
use crate::api::LocalTmdbApi;
use crate::error::Result;
use crate::params::Params;

/// A single movie.
#[derive(Debug)]
pub struct Movie<'a, A> {
    inner: Resource<'a, A>,
}

#[allow(clippy::missing_errors_doc)]
impl<'a, A: LocalTmdbApi> Movie<'a, A> {
    /// Binds `movie/{movie_id}` to `api`.
    pub fn new(api: &'a A, movie_id: u64) -> Self {
        Self {
            inner: Resource::new(api, &[&"movie", &movie_id]),
        }
    }

    /// Primary details. Accepts `append_to_response` (see [`Params::append`]).
    pub async fn details(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("", params).await
    }

    /// Alternative titles.
    pub async fn alternative_titles(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/alternative_titles", params).await
    }

    /// Cast and crew.
    pub async fn credits(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/credits", params).await
    }

    /// IMDb, Wikidata and social IDs.
    pub async fn external_ids(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/external_ids", params).await
    }

    /// Posters, backdrops and logos.
    pub async fn images(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/images", params).await
    }

    /// Keywords.
    pub async fn keywords(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/keywords", params).await
    }

    /// User lists containing the movie.
    pub async fn lists(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/lists", params).await
    }

    /// Recommendations.
    pub async fn recommendations(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/recommendations", params).await
    }

    /// Release dates and certifications per country.
    pub async fn release_dates(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/release_dates", params).await
    }

    /// User reviews.
    pub async fn reviews(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/reviews", params).await
    }

    /// Similar movies.
    pub async fn similar(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/similar", params).await
    }

    /// Translations.
    pub async fn translations(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/translations", params).await
    }

    /// Trailers, teasers and clips.
    pub async fn videos(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/videos", params).await
    }

    /// Streaming/rental availability (JustWatch data).
    pub async fn watch_providers(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/watch/providers", params).await
    }
}

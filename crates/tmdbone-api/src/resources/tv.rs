//! `tv/{series_id}` endpoints, including seasons and episodes.

use serde_json::Value;

use super::Resource;
use crate::api::LocalTmdbApi;
use crate::error::Result;
use crate::params::Params;

/// A TV series.
#[derive(Debug)]
pub struct Tv<'a, A> {
    inner: Resource<'a, A>,
    tv_id: u64,
}

#[allow(clippy::missing_errors_doc)]
impl<'a, A: LocalTmdbApi> Tv<'a, A> {
    /// Binds `tv/{tv_id}` to `api`.
    pub fn new(api: &'a A, tv_id: u64) -> Self {
        Self {
            inner: Resource::new(api, &[&"tv", &tv_id]),
            tv_id,
        }
    }

    /// A season of this series.
    #[must_use]
    pub fn season(&self, season_number: u32) -> Season<'a, A> {
        Season::new(self.inner.api, self.tv_id, season_number)
    }

    /// Primary details, including the season list.
    pub async fn details(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("", params).await
    }

    /// Cast and crew across every season.
    pub async fn aggregate_credits(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/aggregate_credits", params).await
    }

    /// Alternative titles.
    pub async fn alternative_titles(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/alternative_titles", params).await
    }

    /// Content ratings per country.
    pub async fn content_ratings(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/content_ratings", params).await
    }

    /// Cast and crew of the latest season.
    pub async fn credits(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/credits", params).await
    }

    /// External IDs.
    pub async fn external_ids(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/external_ids", params).await
    }

    /// Images.
    pub async fn images(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/images", params).await
    }

    /// Keywords.
    pub async fn keywords(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/keywords", params).await
    }

    /// Recommendations.
    pub async fn recommendations(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/recommendations", params).await
    }

    /// Episodes screened theatrically.
    pub async fn screened_theatrically(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/screened_theatrically", params).await
    }

    /// Similar series.
    pub async fn similar(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/similar", params).await
    }

    /// Translations.
    pub async fn translations(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/translations", params).await
    }

    /// Videos.
    pub async fn videos(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/videos", params).await
    }

    /// Watch providers.
    pub async fn watch_providers(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/watch/providers", params).await
    }
}

/// A season of a TV series.
#[derive(Debug)]
pub struct Season<'a, A> {
    inner: Resource<'a, A>,
    tv_id: u64,
    season_number: u32,
}

#[allow(clippy::missing_errors_doc)]
impl<'a, A: LocalTmdbApi> Season<'a, A> {
    /// Binds `tv/{tv_id}/season/{season_number}` to `api`.
    pub fn new(api: &'a A, tv_id: u64, season_number: u32) -> Self {
        Self {
            inner: Resource::new(api, &[&"tv", &tv_id, &"season", &season_number]),
            tv_id,
            season_number,
        }
    }

    /// An episode of this season.
    #[must_use]
    pub fn episode(&self, episode_number: u32) -> Episode<'a, A> {
        Episode::new(
            self.inner.api,
            self.tv_id,
            self.season_number,
            episode_number,
        )
    }

    /// Season details, including the episode list.
    pub async fn details(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("", params).await
    }

    /// Cast and crew across the season's episodes.
    pub async fn aggregate_credits(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/aggregate_credits", params).await
    }

    /// Cast and crew.
    pub async fn credits(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/credits", params).await
    }

    /// External IDs.
    pub async fn external_ids(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/external_ids", params).await
    }

    /// Images.
    pub async fn images(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/images", params).await
    }

    /// Translations.
    pub async fn translations(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/translations", params).await
    }

    /// Videos.
    pub async fn videos(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/videos", params).await
    }
}

/// A single episode.
#[derive(Debug)]
pub struct Episode<'a, A> {
    inner: Resource<'a, A>,
}

#[allow(clippy::missing_errors_doc)]
impl<'a, A: LocalTmdbApi> Episode<'a, A> {
    /// Binds `tv/{tv_id}/season/{season_number}/episode/{episode_number}` to `api`.
    pub fn new(api: &'a A, tv_id: u64, season_number: u32, episode_number: u32) -> Self {
        Self {
            inner: Resource::new(
                api,
                &[
                    &"tv",
                    &tv_id,
                    &"season",
                    &season_number,
                    &"episode",
                    &episode_number,
                ],
            ),
        }
    }

    /// Episode details.
    pub async fn details(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("", params).await
    }

    /// Cast, crew and guest stars.
    pub async fn credits(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/credits", params).await
    }

    /// External IDs.
    pub async fn external_ids(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/external_ids", params).await
    }

    /// Stills.
    pub async fn images(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/images", params).await
    }

    /// Translations.
    pub async fn translations(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/translations", params).await
    }

    /// Videos.
    pub async fn videos(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/videos", params).await
    }
}

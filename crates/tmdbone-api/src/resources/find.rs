//! `find/{external_id}` lookup.

use std::fmt;

use serde_json::Value;

use super::Resource;
use crate::api::LocalTmdbApi;
use crate::error::Result;
use crate::params::Params;

/// Source namespace of an external ID.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExternalSource {
    /// IMDb (`tt0137523`, `nm0000093`).
    #[default]
    ImdbId,
    /// TheTVDB.
    TvdbId,
    /// Freebase MID.
    FreebaseMid,
    /// Freebase ID.
    FreebaseId,
    /// TVRage.
    TvrageId,
    /// Facebook.
    FacebookId,
    /// Instagram.
    InstagramId,
    /// Twitter / X.
    TwitterId,
    /// TikTok.
    TiktokId,
    /// Wikidata.
    WikidataId,
    /// YouTube.
    YoutubeId,
}

impl ExternalSource {
    /// Wire value for `external_source`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ImdbId => "imdb_id",
            Self::TvdbId => "tvdb_id",
            Self::FreebaseMid => "freebase_mid",
            Self::FreebaseId => "freebase_id",
            Self::TvrageId => "tvrage_id",
            Self::FacebookId => "facebook_id",
            Self::InstagramId => "instagram_id",
            Self::TwitterId => "twitter_id",
            Self::TiktokId => "tiktok_id",
            Self::WikidataId => "wikidata_id",
            Self::YoutubeId => "youtube_id",
        }
    }
}

impl fmt::Display for ExternalSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup of TMDb objects by an ID from another database.
#[derive(Debug)]
pub struct Find<'a, A> {
    inner: Resource<'a, A>,
}

#[allow(clippy::missing_errors_doc)]
impl<'a, A: LocalTmdbApi> Find<'a, A> {
    /// Binds `find/{external_id}` to `api`.
    pub fn new(api: &'a A, external_id: &str) -> Self {
        Self {
            inner: Resource::new(api, &[&"find", &external_id]),
        }
    }

    /// Finds movies, shows, episodes and people matching the ID in `source`.
    pub async fn by(&self, source: ExternalSource, params: Params) -> Result<Option<Value>> {
        let params = params.set("external_source", source.as_str());
        self.inner.get("", params).await
    }
}

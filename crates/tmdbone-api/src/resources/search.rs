//! `search/*` endpoints.

use serde_json::Value;

use super::Resource;
use crate::api::LocalTmdbApi;
use crate::error::Result;
use crate::params::Params;

/// Text search.
///
/// Each method sets `query`; other filters (`page`, `year`,
/// `include_adult`, ...) go in `params`.
#[derive(Debug)]
pub struct Search<'a, A> {
    inner: Resource<'a, A>,
}

#[allow(clippy::missing_errors_doc)]
impl<'a, A: LocalTmdbApi> Search<'a, A> {
    /// Binds `search` to `api`.
    pub fn new(api: &'a A) -> Self {
        Self {
            inner: Resource::new(api, &[&"search"]),
        }
    }

    async fn query(&self, suffix: &str, query: &str, params: Params) -> Result<Option<Value>> {
        self.inner.get(suffix, params.set("query", query)).await
    }

    /// Search movies.
    pub async fn movie(&self, query: &str, params: Params) -> Result<Option<Value>> {
        self.query("/movie", query, params).await
    }

    /// Search TV series.
    pub async fn tv(&self, query: &str, params: Params) -> Result<Option<Value>> {
        self.query("/tv", query, params).await
    }

    /// Search people.
    pub async fn person(&self, query: &str, params: Params) -> Result<Option<Value>> {
        self.query("/person", query, params).await
    }

    /// Search companies.
    pub async fn company(&self, query: &str, params: Params) -> Result<Option<Value>> {
        self.query("/company", query, params).await
    }

    /// Search collections.
    pub async fn collection(&self, query: &str, params: Params) -> Result<Option<Value>> {
        self.query("/collection", query, params).await
    }

    /// Search keywords.
    pub async fn keyword(&self, query: &str, params: Params) -> Result<Option<Value>> {
        self.query("/keyword", query, params).await
    }

    /// Search movies, TV series and people in one request.
    pub async fn multi(&self, query: &str, params: Params) -> Result<Option<Value>> {
        self.query("/multi", query, params).await
    }
}

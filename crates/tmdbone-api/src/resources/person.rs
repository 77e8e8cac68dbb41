//! `person/{person_id}` endpoints.

use serde_json::Value;

use super::Resource;
use crate::api::LocalTmdbApi;
use crate::error::Result;
use crate::params::Params;

/// A cast or crew member.
#[derive(Debug)]
pub struct Person<'a, A> {
    inner: Resource<'a, A>,
}

#[allow(clippy::missing_errors_doc)]
impl<'a, A: LocalTmdbApi> Person<'a, A> {
    /// Binds `person/{person_id}` to `api`.
    pub fn new(api: &'a A, person_id: u64) -> Self {
        Self {
            inner: Resource::new(api, &[&"person", &person_id]),
        }
    }

    /// Biography and primary details.
    pub async fn details(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("", params).await
    }

    /// Movie cast and crew credits.
    pub async fn movie_credits(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/movie_credits", params).await
    }

    /// TV cast and crew credits.
    pub async fn tv_credits(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/tv_credits", params).await
    }

    /// Movie and TV credits in one list.
    pub async fn combined_credits(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/combined_credits", params).await
    }

    /// External IDs.
    pub async fn external_ids(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/external_ids", params).await
    }

    /// Profile images.
    pub async fn images(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/images", params).await
    }

    /// Biography translations.
    pub async fn translations(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/translations", params).await
    }
}

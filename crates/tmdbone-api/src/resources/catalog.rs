//! Secondary entities: collections, companies, networks, keywords, reviews
//! and credits.

use serde_json::Value;

use super::Resource;
use crate::api::LocalTmdbApi;
use crate::error::Result;
use crate::params::Params;

/// A movie collection (franchise).
#[derive(Debug)]
pub struct Collection<'a, A> {
    inner: Resource<'a, A>,
}

#[allow(clippy::missing_errors_doc)]
impl<'a, A: LocalTmdbApi> Collection<'a, A> {
    /// Binds `collection/{collection_id}` to `api`.
    pub fn new(api: &'a A, collection_id: u64) -> Self {
        Self {
            inner: Resource::new(api, &[&"collection", &collection_id]),
        }
    }

    /// Details, including member movies.
    pub async fn details(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("", params).await
    }

    /// Images.
    pub async fn images(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/images", params).await
    }

    /// Translations.
    pub async fn translations(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/translations", params).await
    }
}

/// A production company.
#[derive(Debug)]
pub struct Company<'a, A> {
    inner: Resource<'a, A>,
}

#[allow(clippy::missing_errors_doc)]
impl<'a, A: LocalTmdbApi> Company<'a, A> {
    /// Binds `company/{company_id}` to `api`.
    pub fn new(api: &'a A, company_id: u64) -> Self {
        Self {
            inner: Resource::new(api, &[&"company", &company_id]),
        }
    }

    /// Details.
    pub async fn details(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("", params).await
    }

    /// Alternative names.
    pub async fn alternative_names(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/alternative_names", params).await
    }

    /// Logos.
    pub async fn images(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/images", params).await
    }
}

/// A TV network.
#[derive(Debug)]
pub struct Network<'a, A> {
    inner: Resource<'a, A>,
}

#[allow(clippy::missing_errors_doc)]
impl<'a, A: LocalTmdbApi> Network<'a, A> {
    /// Binds `network/{network_id}` to `api`.
    pub fn new(api: &'a A, network_id: u64) -> Self {
        Self {
            inner: Resource::new(api, &[&"network", &network_id]),
        }
    }

    /// Details.
    pub async fn details(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("", params).await
    }

    /// Alternative names.
    pub async fn alternative_names(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/alternative_names", params).await
    }

    /// Logos.
    pub async fn images(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/images", params).await
    }
}

/// A keyword.
#[derive(Debug)]
pub struct Keyword<'a, A> {
    inner: Resource<'a, A>,
}

#[allow(clippy::missing_errors_doc)]
impl<'a, A: LocalTmdbApi> Keyword<'a, A> {
    /// Binds `keyword/{keyword_id}` to `api`.
    pub fn new(api: &'a A, keyword_id: u64) -> Self {
        Self {
            inner: Resource::new(api, &[&"keyword", &keyword_id]),
        }
    }

    /// Details.
    pub async fn details(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("", params).await
    }

    /// Movies tagged with the keyword.
    pub async fn movies(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/movies", params).await
    }
}

/// A user review.
#[derive(Debug)]
pub struct Review<'a, A> {
    inner: Resource<'a, A>,
}

#[allow(clippy::missing_errors_doc)]
impl<'a, A: LocalTmdbApi> Review<'a, A> {
    /// Binds `review/{review_id}` to `api`.
    pub fn new(api: &'a A, review_id: &str) -> Self {
        Self {
            inner: Resource::new(api, &[&"review", &review_id]),
        }
    }

    /// Review content.
    pub async fn details(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("", params).await
    }
}

/// A cast/crew credit record.
#[derive(Debug)]
pub struct Credit<'a, A> {
    inner: Resource<'a, A>,
}

#[allow(clippy::missing_errors_doc)]
impl<'a, A: LocalTmdbApi> Credit<'a, A> {
    /// Binds `credit/{credit_id}` to `api`.
    pub fn new(api: &'a A, credit_id: &str) -> Self {
        Self {
            inner: Resource::new(api, &[&"credit", &credit_id]),
        }
    }

    /// Credit details.
    pub async fn details(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("", params).await
    }
}

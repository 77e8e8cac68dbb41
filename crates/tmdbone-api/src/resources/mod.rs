//! Path-template resources.
//!
//! Each type wraps a fixed path prefix (e.g. `movie/550`) and exposes one
//! method per documented sub-endpoint. Resources borrow any
//! [`LocalTmdbApi`] implementation, normally a [`crate::TmdbClient`].
#![allow(clippy::future_not_send)]

mod catalog;
mod discover;
mod find;
mod movie;
mod person;
mod reference;
mod search;
mod trending;
mod tv;

use std::fmt::Display;

use serde_json::Value;

use crate::api::LocalTmdbApi;
use crate::error::{Result, TmdbError};
use crate::params::Params;

pub use catalog::{Collection, Company, Credit, Keyword, Network, Review};
pub use discover::Discover;
pub use find::{ExternalSource, Find};
pub use movie::Movie;
pub use person::Person;
pub use reference::{Certification, Configuration, Genre};
pub use search::Search;
pub use trending::{TimeWindow, Trending};
pub use tv::{Episode, Season, Tv};

/// A path prefix bound to an API transport.
#[derive(Debug)]
struct Resource<'a, A> {
    api: &'a A,
    path: String,
    /// First segment that cannot be expressed in a path.
    rejected: Option<String>,
}

impl<'a, A: LocalTmdbApi> Resource<'a, A> {
    /// Percent-encodes each of `segments` and joins them with `/`.
    ///
    /// Empty, `.` and `..` segments are kept aside; requests on such a
    /// resource fail with `InvalidSegment` without reaching the transport.
    fn new(api: &'a A, segments: &[&dyn Display]) -> Self {
        let mut rejected = None;
        let mut encoded = Vec::with_capacity(segments.len());

        for segment in segments {
            let raw = segment.to_string();
            if rejected.is_none() && matches!(raw.as_str(), "" | "." | "..") {
                rejected = Some(raw.clone());
            }
            encoded.push(urlencoding::encode(&raw).into_owned());
        }

        Self {
            api,
            path: encoded.join("/"),
            rejected,
        }
    }

    /// GETs `{path}{suffix}`.
    async fn get(&self, suffix: &str, params: Params) -> Result<Option<Value>> {
        if let Some(segment) = &self.rejected {
            return Err(TmdbError::InvalidSegment {
                segment: segment.clone(),
            });
        }
        let path = format!("{}{suffix}", self.path);
        self.api.get_json(&path, params).await
    }
}

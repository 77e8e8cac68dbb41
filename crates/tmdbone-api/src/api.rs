//! `TmdbApi` trait definition.
#![allow(clippy::future_not_send)]

use serde_json::Value;

use crate::error::Result;
use crate::params::Params;

/// Transport used by the resource types.
///
/// Abstracts request execution for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TmdbApi: Send)]
pub trait LocalTmdbApi {
    /// Sends a GET request for `path` (relative to the API root, e.g.
    /// `movie/550/credits`) and returns the decoded JSON body.
    ///
    /// Returns `Ok(None)` when the resource does not exist (HTTP 404) or
    /// the body is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails after retries, every credential
    /// is rejected, or the body is not valid JSON.
    async fn get_json(&self, path: &str, params: Params) -> Result<Option<Value>>;
}

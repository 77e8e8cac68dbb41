//! Async client library for the TMDb v3 API.
//!
//! Builds request URLs, attaches credentials, and returns the raw JSON
//! returned by the service. Requests go through a shared loop that rotates
//! API keys on authentication failure, backs off on rate limiting, and
//! retries transient network errors a bounded number of times.

mod api;
mod client;
mod config;
mod credentials;
mod error;
mod image;
mod params;
mod rate_limiter;
mod types;

/// Path-template resources (movies, TV, people, search, ...).
pub mod resources;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTmdbApi, TmdbApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{TmdbClient, TmdbClientBuilder};
pub use config::ClientConfig;
pub use credentials::{Credential, KeyRing};
#[allow(clippy::module_name_repetitions)]
pub use error::{Result, TmdbError};
pub use image::{IMAGE_BASE_URL, ImageHelper, ImageSize};
pub use params::{Params, QueryValue};
pub use types::TmdbErrorResponse;

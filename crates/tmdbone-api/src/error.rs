//! Error type returned by every client operation.

use thiserror::Error;

/// Body preview limit (in characters) for `TmdbError::Api` display.
const BODY_PREVIEW_CHARS: usize = 200;

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, TmdbError>;

/// Errors raised by the TMDb client.
///
/// URLs carried by these variants are redacted: the `api_key` query value is
/// replaced with `***`.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum TmdbError {
    /// The client was built without any API key or bearer token.
    #[error("no TMDb credentials configured (set an API key or bearer token)")]
    NoCredentials,

    /// Every configured credential was rejected with HTTP 401.
    #[error("all {attempts} TMDb credential(s) were rejected (HTTP 401): {url}")]
    Unauthorized {
        /// Number of credentials tried.
        attempts: usize,
        /// Redacted request URL.
        url: String,
        /// Body of the last 401 response.
        body: Option<String>,
    },

    /// HTTP 429 persisted past the retry budget.
    #[error("TMDb API rate limit exceeded after {retries} retries: {url}")]
    RateLimited {
        /// Retries performed.
        retries: u32,
        /// Redacted request URL.
        url: String,
    },

    /// Transport failure persisted past the retry budget.
    #[error("request failed after {attempts} attempt(s): {url}")]
    Network {
        /// Attempts performed.
        attempts: u32,
        /// Redacted request URL.
        url: String,
        /// Last transport error.
        #[source]
        source: reqwest::Error,
    },

    /// HTTP 5xx persisted past the retry budget.
    #[error("TMDb API unavailable (HTTP {status}) after {attempts} attempt(s): {url}")]
    Unavailable {
        /// Last status code.
        status: u16,
        /// Attempts performed.
        attempts: u32,
        /// Redacted request URL.
        url: String,
    },

    /// Any other non-success status.
    #[error("{}", describe_api_error(.status, .url, .status_message, .body))]
    Api {
        /// HTTP status code.
        status: u16,
        /// Redacted request URL.
        url: String,
        /// `status_message` from a TMDb error body, when present.
        status_message: Option<String>,
        /// Raw response body.
        body: Option<String>,
    },

    /// A success body was not valid JSON.
    #[error("failed to decode JSON response: {url}")]
    Decode {
        /// Redacted request URL.
        url: String,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },

    /// A request path could not be joined onto the base URL.
    #[error("invalid request URL for path {path:?}")]
    InvalidUrl {
        /// Offending path.
        path: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },

    /// A caller supplied path segment cannot be addressed (`""`, `.` or `..`).
    #[error("invalid path segment {segment:?}")]
    InvalidSegment {
        /// Raw segment as given.
        segment: String,
    },

    /// An outgoing request could not be assembled.
    #[error("failed to build request for path {path:?}")]
    BuildRequest {
        /// Request path.
        path: String,
        /// Builder error.
        #[source]
        source: reqwest::Error,
    },

    /// The underlying HTTP client failed to build.
    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}

impl TmdbError {
    /// HTTP status associated with the error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::RateLimited { .. } => Some(429),
            Self::Unavailable { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::NoCredentials
            | Self::Network { .. }
            | Self::Decode { .. }
            | Self::InvalidUrl { .. }
            | Self::InvalidSegment { .. }
            | Self::BuildRequest { .. }
            | Self::HttpClient(_) => None,
        }
    }
}

/// Formats `Api` errors as `TMDb API error[: message] (Status: N, URL: U, Body: B)`.
///
/// Long bodies are cut to `BODY_PREVIEW_CHARS` characters with newlines flattened.
#[allow(clippy::trivially_copy_pass_by_ref, clippy::ref_option)]
fn describe_api_error(
    status: &u16,
    url: &str,
    status_message: &Option<String>,
    body: &Option<String>,
) -> String {
    let base = status_message.as_deref().map_or_else(
        || String::from("TMDb API error"),
        |msg| format!("TMDb API error: {msg}"),
    );

    let mut meta = vec![format!("Status: {status}")];
    if !url.is_empty() {
        meta.push(format!("URL: {url}"));
    }
    if let Some(body) = body.as_deref().filter(|b| !b.is_empty()) {
        if body.chars().count() > BODY_PREVIEW_CHARS {
            let preview: String = body
                .chars()
                .take(BODY_PREVIEW_CHARS)
                .map(|c| if c == '\n' { ' ' } else { c })
                .collect();
            meta.push(format!("Body: {preview}..."));
        } else {
            meta.push(format!("Body: {body}"));
        }
    }

    format!("{base} ({})", meta.join(", "))
}

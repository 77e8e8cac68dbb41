//! TMDb wire types shared by the client.

use serde::Deserialize;

/// TMDb error response body.
///
/// Returned alongside most non-success statuses, e.g.
/// `{"status_code":7,"status_message":"Invalid API key","success":false}`.
#[derive(Debug, Clone, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbErrorResponse {
    /// TMDb internal status code.
    pub status_code: u32,
    /// Human-readable message.
    pub status_message: String,
    /// Always `false` for errors.
    #[serde(default)]
    pub success: bool,
}

impl TmdbErrorResponse {
    /// Parses a response body as a TMDb error object, if it is one.
    pub(crate) fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

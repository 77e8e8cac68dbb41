//! `trending/{media_type}/{time_window}` endpoints.

use std::fmt;

use serde_json::Value;

use super::Resource;
use crate::api::LocalTmdbApi;
use crate::error::Result;
use crate::params::Params;

/// Trending window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeWindow {
    /// Last 24 hours.
    #[default]
    Day,
    /// Last 7 days.
    Week,
}

impl TimeWindow {
    /// Path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trending movies, TV series and people.
#[derive(Debug)]
pub struct Trending<'a, A> {
    inner: Resource<'a, A>,
}

#[allow(clippy::missing_errors_doc)]
impl<'a, A: LocalTmdbApi> Trending<'a, A> {
    /// Binds `trending` to `api`.
    pub fn new(api: &'a A) -> Self {
        Self {
            inner: Resource::new(api, &[&"trending"]),
        }
    }

    async fn window(&self, media: &str, window: TimeWindow) -> Result<Option<Value>> {
        self.inner
            .get(&format!("/{media}/{window}"), Params::new())
            .await
    }

    /// Trending across all media types.
    pub async fn all(&self, window: TimeWindow) -> Result<Option<Value>> {
        self.window("all", window).await
    }

    /// Trending movies.
    pub async fn movie(&self, window: TimeWindow) -> Result<Option<Value>> {
        self.window("movie", window).await
    }

    /// Trending TV series.
    pub async fn tv(&self, window: TimeWindow) -> Result<Option<Value>> {
        self.window("tv", window).await
    }

    /// Trending people.
    pub async fn person(&self, window: TimeWindow) -> Result<Option<Value>> {
        self.window("person", window).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::resources::mock::RecordingApi;

    #[tokio::test]
    async fn test_trending_paths() {
        // Arrange
        let api = RecordingApi::default();
        let trending = Trending::new(&api);

        // Act
        trending.all(TimeWindow::default()).await.unwrap();
        trending.movie(TimeWindow::Week).await.unwrap();
        trending.tv(TimeWindow::Day).await.unwrap();
        trending.person(TimeWindow::Week).await.unwrap();

        // Assert
        assert_eq!(
            api.paths(),
            vec![
                "trending/all/day",
                "trending/movie/week",
                "trending/tv/day",
                "trending/person/week",
            ]
        );
        assert!(api.last().1.is_empty());
    }
}

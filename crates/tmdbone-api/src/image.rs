//! Image URL construction from TMDb partial paths.

use std::fmt;

/// Base URL of the TMDb image CDN.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/";

/// Image size segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageSize {
    /// Source resolution.
    #[default]
    Original,
    /// 92px wide.
    W92,
    /// 154px wide.
    W154,
    /// 185px wide.
    W185,
    /// 300px wide.
    W300,
    /// 342px wide.
    W342,
    /// 500px wide.
    W500,
    /// 780px wide.
    W780,
    /// 1280px wide.
    W1280,
    /// 632px high (profiles).
    H632,
    /// Any other size string from `configuration` (e.g. `w45`).
    Custom(String),
}

impl ImageSize {
    /// Path segment for this size.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Original => "original",
            Self::W92 => "w92",
            Self::W154 => "w154",
            Self::W185 => "w185",
            Self::W300 => "w300",
            Self::W342 => "w342",
            Self::W500 => "w500",
            Self::W780 => "w780",
            Self::W1280 => "w1280",
            Self::H632 => "h632",
            Self::Custom(s) => s,
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ImageSize {
    fn from(value: &str) -> Self {
        match value {
            "original" => Self::Original,
            "w92" => Self::W92,
            "w154" => Self::W154,
            "w185" => Self::W185,
            "w300" => Self::W300,
            "w342" => Self::W342,
            "w500" => Self::W500,
            "w780" => Self::W780,
            "w1280" => Self::W1280,
            "h632" => Self::H632,
            other => Self::Custom(String::from(other)),
        }
    }
}

/// Builds full image URLs.
#[derive(Debug, Clone, Copy)]
pub struct ImageHelper;

impl ImageHelper {
    /// Full URL for `path` (e.g. `/abc.jpg`) at `size`.
    ///
    /// Returns an empty string when `path` is missing or empty.
    ///
    /// ```
    /// use tmdbone_api::{ImageHelper, ImageSize};
    ///
    /// assert_eq!(
    ///     ImageHelper::url(Some("/abc.jpg"), &ImageSize::W500),
    ///     "https://image.tmdb.org/t/p/w500/abc.jpg"
    /// );
    /// assert_eq!(ImageHelper::url(None, &ImageSize::Original), "");
    /// ```
    #[must_use]
    pub fn url(path: Option<&str>, size: &ImageSize) -> String {
        match path {
            Some(p) if !p.is_empty() => {
                format!("{IMAGE_BASE_URL}{size}/{}", p.trim_start_matches('/'))
            }
            _ => String::new(),
        }
    }
}

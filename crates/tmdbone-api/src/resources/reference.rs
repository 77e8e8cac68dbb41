//! Reference data: genres, API configuration and certifications.

use serde_json::Value;

use super::Resource;
use crate::api::LocalTmdbApi;
use crate::error::Result;
use crate::params::Params;

/// Official genre lists.
#[derive(Debug)]
pub struct Genre<'a, A> {
    inner: Resource<'a, A>,
}

#[allow(clippy::missing_errors_doc)]
impl<'a, A: LocalTmdbApi> Genre<'a, A> {
    /// Binds `genre` to `api`.
    pub fn new(api: &'a A) -> Self {
        Self {
            inner: Resource::new(api, &[&"genre"]),
        }
    }

    /// Movie genres.
    pub async fn movie_list(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/movie/list", params).await
    }

    /// TV genres.
    pub async fn tv_list(&self, params: Params) -> Result<Option<Value>> {
        self.inner.get("/tv/list", params).await
    }
}

/// API-wide configuration (image base URLs, countries, languages, ...).
#[derive(Debug)]
pub struct Configuration<'a, A> {
    inner: Resource<'a, A>,
}

#[allow(clippy::missing_errors_doc)]
impl<'a, A: LocalTmdbApi> Configuration<'a, A> {
    /// Binds `configuration` to `api`.
    pub fn new(api: &'a A) -> Self {
        Self {
            inner: Resource::new(api, &[&"configuration"]),
        }
    }

    /// Image base URLs, sizes and change keys.
    pub async fn api_details(&self) -> Result<Option<Value>> {
        self.inner.get("", Params::new()).await
    }

    /// ISO 3166-1 countries.
    pub async fn countries(&self) -> Result<Option<Value>> {
        self.inner.get("/countries", Params::new()).await
    }

    /// Departments and jobs.
    pub async fn jobs(&self) -> Result<Option<Value>> {
        self.inner.get("/jobs", Params::new()).await
    }

    /// ISO 639-1 languages.
    pub async fn languages(&self) -> Result<Option<Value>> {
        self.inner.get("/languages", Params::new()).await
    }

    /// Officially supported translations.
    pub async fn primary_translations(&self) -> Result<Option<Value>> {
        self.inner.get("/primary_translations", Params::new()).await
    }

    /// Timezones by country.
    pub async fn timezones(&self) -> Result<Option<Value>> {
        self.inner.get("/timezones", Params::new()).await
    }
}

/// Official certification (age rating) lists.
#[derive(Debug)]
pub struct Certification<'a, A> {
    inner: Resource<'a, A>,
}

#[allow(clippy::missing_errors_doc)]
impl<'a, A: LocalTmdbApi> Certification<'a, A> {
    /// Binds `certification` to `api`.
    pub fn new(api: &'a A) -> Self {
        Self {
            inner: Resource::new(api, &[&"certification"]),
        }
    }

    /// Movie certifications per country.
    pub async fn movie_list(&self) -> Result<Option<Value>> {
        self.inner.get("/movie/list", Params::new()).await
    }

    /// TV certifications per country.
    pub async fn tv_list(&self) -> Result<Option<Value>> {
        self.inner.get("/tv/list", Params::new()).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::resources::mock::{RecordingApi, pair};

    #[tokio::test]
    async fn test_genre_lists() {
        // Arrange
        let api = RecordingApi::default();
        let genre = Genre::new(&api);

        // Act
        genre.movie_list(Params::new()).await.unwrap();
        genre
            .tv_list(Params::new().set("language", "ja"))
            .await
            .unwrap();

        // Assert
        assert_eq!(api.paths(), vec!["genre/movie/list", "genre/tv/list"]);
        assert_eq!(api.last().1, vec![pair("language", "ja")]);
    }

    #[tokio::test]
    async fn test_configuration_paths() {
        // Arrange
        let api = RecordingApi::default();
        let config = Configuration::new(&api);

        // Act
        config.api_details().await.unwrap();
        config.countries().await.unwrap();
        config.jobs().await.unwrap();
        config.languages().await.unwrap();
        config.primary_translations().await.unwrap();
        config.timezones().await.unwrap();

        // Assert
        assert_eq!(
            api.paths(),
            vec![
                "configuration",
                "configuration/countries",
                "configuration/jobs",
                "configuration/languages",
                "configuration/primary_translations",
                "configuration/timezones",
            ]
        );
    }

    #[tokio::test]
    async fn test_certification_paths() {
        // Arrange
        let api = RecordingApi::default();
        let certification = Certification::new(&api);

        // Act
        certification.movie_list().await.unwrap();
        certification.tv_list().await.unwrap();

        // Assert
        assert_eq!(
            api.paths(),
            vec!["certification/movie/list", "certification/tv/list"]
        );
    }
}

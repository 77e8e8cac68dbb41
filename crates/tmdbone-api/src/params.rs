//! Query parameter collection and sanitization.

use std::collections::BTreeMap;
use std::fmt;

/// Parameter key holding sub-requests merged into one response.
const APPEND_TO_RESPONSE: &str = "append_to_response";

/// A single query parameter value before sanitization.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// Free text.
    Text(String),
    /// Integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean, sent as `true`/`false`.
    Bool(bool),
    /// List, sent comma-joined.
    List(Vec<String>),
    /// Absent value, dropped from the query string.
    Null,
}

impl QueryValue {
    /// Renders the wire value, or `None` if the parameter should be dropped.
    #[must_use]
    pub fn to_query_value(&self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s.clone()),
            Self::Int(n) => Some(n.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Bool(b) => Some(String::from(if *b { "true" } else { "false" })),
            Self::List(items) if items.is_empty() => None,
            Self::List(items) => Some(items.join(",")),
            Self::Null => None,
        }
    }

    /// Normalizes to a list: scalars become a one-item list, `Null` an empty one.
    fn into_list(self) -> Vec<String> {
        match self {
            Self::List(items) => items,
            Self::Text(s) if s.is_empty() => Vec::new(),
            Self::Null => Vec::new(),
            other => other.to_query_value().into_iter().collect(),
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_query_value().as_deref().unwrap_or(""))
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for QueryValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for QueryValue {
                fn from(value: $t) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Text(value.to_string()), Self::Int)
    }
}

impl From<usize> for QueryValue {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Text(value.to_string()), Self::Int)
    }
}

impl<T: ToString> From<Vec<T>> for QueryValue {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString> From<&[T]> for QueryValue {
    fn from(value: &[T]) -> Self {
        Self::List(value.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString, const N: usize> From<[T; N]> for QueryValue {
    fn from(value: [T; N]) -> Self {
        Self::List(value.iter().map(ToString::to_string).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Request parameters for a TMDb endpoint.
///
/// Keys are kept sorted so the generated query string is deterministic.
///
/// ```
/// use tmdbone_api::Params;
///
/// let params = Params::new()
///     .set("language", "en-US")
///     .set("page", 2)
///     .set("region", None::<&str>)
///     .append(["credits", "images"]);
/// assert_eq!(
///     params.to_query(),
///     vec![
///         (String::from("append_to_response"), String::from("credits,images")),
///         (String::from("language"), String::from("en-US")),
///         (String::from("page"), String::from("2")),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    values: BTreeMap<String, QueryValue>,
}

impl Params {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, replacing any previous value.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a parameter in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Merges sub-request names into `append_to_response`.
    ///
    /// An existing `append_to_response` value is normalized to a list first,
    /// so `append` can be combined with an explicit `set`.
    #[must_use]
    pub fn append(mut self, value: impl Into<QueryValue>) -> Self {
        let extra = value.into().into_list();
        let mut merged = self
            .values
            .remove(APPEND_TO_RESPONSE)
            .map(QueryValue::into_list)
            .unwrap_or_default();
        merged.extend(extra);
        self.values
            .insert(String::from(APPEND_TO_RESPONSE), QueryValue::List(merged));
        self
    }

    /// Removes a parameter, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        self.values.remove(key)
    }

    /// Returns the raw value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.values.get(key)
    }

    /// Returns `true` if `key` is set to a value that will be sent.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values
            .get(key)
            .is_some_and(|v| v.to_query_value().is_some())
    }

    /// Returns `true` if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of parameters set (including ones that will be dropped).
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Sanitized `(key, value)` pairs for the query string.
    ///
    /// Null values and empty lists are dropped, booleans become
    /// `true`/`false`, and lists are comma-joined.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        self.values
            .iter()
            .filter_map(|(k, v)| v.to_query_value().map(|s| (k.clone(), s)))
            .collect()
    }
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(k: &str, v: &str) -> (String, String) {
        (String::from(k), String::from(v))
    }

    #[test]
    fn test_to_query_drops_nulls_and_empty_lists() {
        // Arrange
        let params = Params::new()
            .set("language", "en-US")
            .set("region", None::<String>)
            .set("with_genres", Vec::<String>::new());

        // Act
        let query = params.to_query();

        // Assert
        assert_eq!(query, vec![pair("language", "en-US")]);
    }

    #[test]
    fn test_to_query_renders_bools_lowercase() {
        // Arrange
        let params = Params::new()
            .set("include_adult", false)
            .set("include_video", true);

        // Act & Assert
        assert_eq!(
            params.to_query(),
            vec![pair("include_adult", "false"), pair("include_video", "true")]
        );
    }

    #[test]
    fn test_to_query_joins_lists() {
        // Arrange
        let params = Params::new().set("with_genres", vec![16, 35]);

        // Act & Assert
        assert_eq!(params.to_query(), vec![pair("with_genres", "16,35")]);
    }

    #[test]
    fn test_append_without_existing() {
        // Arrange & Act
        let params = Params::new().append("credits");

        // Assert
        assert_eq!(params.to_query(), vec![pair("append_to_response", "credits")]);
    }

    #[test]
    fn test_append_merges_with_existing_scalar() {
        // Arrange
        let params = Params::new().set("append_to_response", "videos");

        // Act
        let params = params.append(["credits", "images"]);

        // Assert
        assert_eq!(
            params.to_query(),
            vec![pair("append_to_response", "videos,credits,images")]
        );
    }

    #[test]
    fn test_append_merges_with_existing_list() {
        // Arrange
        let params = Params::new().set("append_to_response", vec!["videos", "keywords"]);

        // Act
        let params = params.append("credits");

        // Assert
        assert_eq!(
            params.to_query(),
            vec![pair("append_to_response", "videos,keywords,credits")]
        );
    }

    #[test]
    fn test_append_empty_adds_nothing() {
        // Arrange
        let params = Params::new().set("append_to_response", "videos");

        // Act
        let params = params.append("").append(None::<&str>);

        // Assert
        assert_eq!(params.to_query(), vec![pair("append_to_response", "videos")]);
    }

    #[test]
    fn test_contains_ignores_nulls() {
        // Arrange
        let params = Params::new().set("language", None::<&str>).set("page", 1);

        // Act & Assert
        assert!(!params.contains("language"));
        assert!(params.contains("page"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_from_iterator() {
        // Arrange & Act
        let params: Params = [("page", "3"), ("language", "ja-JP")].into_iter().collect();

        // Assert
        assert_eq!(
            params.to_query(),
            vec![pair("language", "ja-JP"), pair("page", "3")]
        );
    }

    #[test]
    fn test_large_u64_falls_back_to_text() {
        // Arrange & Act
        let value = QueryValue::from(u64::MAX);

        // Assert
        assert_eq!(value.to_query_value().as_deref(), Some("18446744073709551615"));
    }
}

use crate::error::{CoreError, Result};
use std::fmt::Display;

/// The identifier a long URL is registered under.
///
/// Any string is accepted. Generated codes are decimal strings, custom
/// codes are whatever the user typed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShortCode(String);

impl ShortCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Extracts the short code from a request path.
    ///
    /// The code is everything after the leading `/`, taken verbatim: no
    /// percent-decoding and no trimming, so `/a/b` yields `a/b` and `/`
    /// yields the empty code.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkhop_core::ShortCode;
    ///
    /// let code = ShortCode::from_path("/abc").unwrap();
    /// assert_eq!(code.as_str(), "abc");
    /// ```
    pub fn from_path(path: &str) -> Result<Self> {
        path.strip_prefix('/')
            .map(Self::new)
            .ok_or_else(|| CoreError::MissingSeparator(path.to_owned()))
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ShortCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ShortCode {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_path_strips_one_separator() {
        assert_eq!(ShortCode::from_path("/abc").unwrap().as_str(), "abc");
        assert_eq!(ShortCode::from_path("//abc").unwrap().as_str(), "/abc");
        assert_eq!(ShortCode::from_path("/a/b").unwrap().as_str(), "a/b");
    }

    #[test]
    fn from_path_root_is_empty() {
        let code = ShortCode::from_path("/").unwrap();
        assert!(code.is_empty());
    }

    #[test]
    fn from_path_does_not_decode() {
        let code = ShortCode::from_path("/hello%20world").unwrap();
        assert_eq!(code.as_str(), "hello%20world");
    }

    #[test]
    fn from_path_without_separator() {
        let err = ShortCode::from_path("abc").unwrap_err();
        assert_eq!(err, CoreError::MissingSeparator("abc".to_string()));
    }

    #[test]
    fn display_matches_inner() {
        assert_eq!(ShortCode::new("my code").to_string(), "my code");
    }

    #[test]
    fn to_url_joins_with_base() {
        let code = ShortCode::new("abc123");
        assert_eq!(
            code.to_url("http://localhost:8080"),
            "http://localhost:8080/abc123"
        );
        assert_eq!(
            code.to_url("http://localhost:8080/"),
            "http://localhost:8080/abc123"
        );
    }
}

const HTTP_SCHEME: &str = "http://";
const HTTPS_SCHEME: &str = "https://";

/// Prepends `https://` unless the URL already starts with `http://` or
/// `https://`.
///
/// This is the only check applied to long URLs. The prefix match is case
/// sensitive and nothing else about the URL is validated, so the empty
/// string normalizes to `https://`.
pub fn normalize_long_url(long_url: &str) -> String {
    if long_url.starts_with(HTTP_SCHEME) || long_url.starts_with(HTTPS_SCHEME) {
        long_url.to_owned()
    } else {
        format!("{HTTPS_SCHEME}{long_url}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_https() {
        assert_eq!(normalize_long_url("example.com"), "https://example.com");
    }

    #[test]
    fn existing_scheme_is_kept() {
        assert_eq!(normalize_long_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_long_url("https://example.com"), "https://example.com");
    }

    #[test]
    fn other_schemes_are_prefixed() {
        assert_eq!(normalize_long_url("ftp://example.com"), "https://ftp://example.com");
        assert_eq!(normalize_long_url("HTTP://example.com"), "https://HTTP://example.com");
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize_long_url(""), "https://");
    }
}

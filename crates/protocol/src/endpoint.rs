//! Backend base URL defaults and validation.
//!
//! Both the HTTP client and the configuration loader accept a base URL, so
//! the rules for what counts as usable live here.

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Checks that `url` is an absolute `http` or `https` URL with a host, and
/// returns it with surrounding whitespace and trailing `/` removed.
///
/// On failure the error is a short reason suitable for an error message.
///
/// # Errors
///
/// Returns the reason the URL was rejected.
///
/// # Examples
///
/// ```
/// use taskpro_protocol::endpoint::normalize_base_url;
///
/// assert_eq!(
///     normalize_base_url(" http://localhost:8000/api/ "),
///     Ok("http://localhost:8000/api")
/// );
/// assert_eq!(normalize_base_url("http://"), Err("missing host"));
/// ```
pub fn normalize_base_url(url: &str) -> Result<&str, &'static str> {
    let url = url.trim();
    if url.is_empty() {
        return Err("must not be empty");
    }

    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or("must start with http:// or https://")?;
    if rest.trim_matches('/').is_empty() {
        return Err("missing host");
    }

    Ok(url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(normalize_base_url(DEFAULT_BASE_URL), Ok(DEFAULT_BASE_URL));
    }

    #[test]
    fn trailing_slashes_are_dropped() {
        assert_eq!(
            normalize_base_url("https://tasks.example.com//"),
            Ok("https://tasks.example.com")
        );
    }

    #[test]
    fn rejections() {
        assert_eq!(normalize_base_url("   "), Err("must not be empty"));
        assert_eq!(
            normalize_base_url("localhost:8000/api"),
            Err("must start with http:// or https://")
        );
        assert_eq!(
            normalize_base_url("ftp://example.com"),
            Err("must start with http:// or https://")
        );
        assert_eq!(normalize_base_url("http://"), Err("missing host"));
        assert_eq!(normalize_base_url("https:///"), Err("missing host"));
    }
}

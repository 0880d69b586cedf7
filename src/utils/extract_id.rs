//! Identifier extraction from user-supplied short URLs.

/// Returns the trailing `/`-separated segment of `short_url_or_id`.
///
/// Callers may pass a bare id (`abc123`) or a full short URL
/// (`http://host/abc123`) and get the same identifier back. Identifiers
/// containing `/` are therefore unsupported.
///
/// # Examples
///
/// ```
/// use short_to_me::utils::extract_id::extract_id;
///
/// assert_eq!(extract_id("http://short.to/abc123"), "abc123");
/// assert_eq!(extract_id("abc123"), "abc123");
/// ```
pub fn extract_id(short_url_or_id: &str) -> &str {
    short_url_or_id
        .rsplit('/')
        .next()
        .unwrap_or(short_url_or_id)
}

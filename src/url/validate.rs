use crate::UrlError;
use url::Url;

/// Returns true iff the address has both a non-empty scheme and a
/// non-empty authority (host)
///
/// This is the only admission filter: it does not restrict the scheme to
/// HTTP(S), does not check reachability, and performs no normalization of
/// trailing slashes or default ports. The visited set relies on exact
/// canonical-string equality, so nothing beyond `Url`'s own parse-time
/// canonicalization is applied.
pub fn is_fetchable(address: &Url) -> bool {
    // A parsed Url always carries a scheme, so the authority is the
    // deciding factor.
    address.host_str().map_or(false, |h| !h.is_empty())
}

/// Parses an absolute URL string into an Address
///
/// Returns None for unparseable input or input without an authority.
/// Malformed input is never an error: an unparseable string is simply not
/// a fetchable address.
pub fn parse_address(input: &str) -> Option<Url> {
    let url = Url::parse(input).ok()?;
    is_fetchable(&url).then_some(url)
}

/// Resolves a possibly-relative reference against a base address
///
/// Absolute references pass through `join` unchanged; scheme-relative,
/// path-relative, and fragment-only references are resolved against the
/// base's scheme/authority/path per RFC 3986. Returns None if the result
/// is unparseable or not fetchable.
pub fn resolve(base: &Url, candidate: &str) -> Option<Url> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return None;
    }

    let resolved = base.join(candidate).ok()?;
    is_fetchable(&resolved).then_some(resolved)
}

/// Parses the seed address, producing a descriptive error on failure
///
/// The seed is the one place where an invalid URL aborts the run instead
/// of being silently dropped.
pub fn parse_seed(input: &str) -> Result<Url, UrlError> {
    let url = Url::parse(input).map_err(|_| UrlError::Parse(input.to_string()))?;
    if !is_fetchable(&url) {
        return Err(UrlError::MissingAuthority(input.to_string()));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://example.com/dir/page.html").unwrap()
    }

    #[test]
    fn test_absolute_url_is_fetchable() {
        let url = parse_address("http://example.com/page").unwrap();
        assert!(is_fetchable(&url));
    }

    #[test]
    fn test_unparseable_string_rejected() {
        assert!(parse_address("not-a-url").is_none());
    }

    #[test]
    fn test_missing_authority_rejected() {
        // mailto: parses but has no host
        assert!(parse_address("mailto:someone@example.com").is_none());
        assert!(parse_address("javascript:void(0)").is_none());
    }

    #[test]
    fn test_non_http_scheme_with_authority_accepted() {
        // Scheme is not restricted; only the authority matters
        assert!(parse_address("ftp://files.example.com/a").is_some());
    }

    #[test]
    fn test_resolve_absolute_passes_through() {
        let resolved = resolve(&base(), "http://other.example/z").unwrap();
        assert_eq!(resolved.as_str(), "http://other.example/z");
    }

    #[test]
    fn test_resolve_path_relative() {
        let resolved = resolve(&base(), "other.html").unwrap();
        assert_eq!(resolved.as_str(), "http://example.com/dir/other.html");
    }

    #[test]
    fn test_resolve_root_relative() {
        let resolved = resolve(&base(), "/x.php").unwrap();
        assert_eq!(resolved.as_str(), "http://example.com/x.php");
    }

    #[test]
    fn test_resolve_scheme_relative() {
        let resolved = resolve(&base(), "//cdn.example.com/lib.js").unwrap();
        assert_eq!(resolved.as_str(), "http://cdn.example.com/lib.js");
    }

    #[test]
    fn test_resolve_fragment_only() {
        // Fragment-only references resolve to the base document
        let resolved = resolve(&base(), "#section").unwrap();
        assert_eq!(resolved.host_str(), Some("example.com"));
        assert_eq!(resolved.path(), "/dir/page.html");
    }

    #[test]
    fn test_resolve_empty_rejected() {
        assert!(resolve(&base(), "").is_none());
        assert!(resolve(&base(), "   ").is_none());
    }

    #[test]
    fn test_resolve_mailto_rejected() {
        assert!(resolve(&base(), "mailto:x@example.com").is_none());
    }

    #[test]
    fn test_parse_seed_valid() {
        assert!(parse_seed("https://example.com/").is_ok());
    }

    #[test]
    fn test_parse_seed_invalid() {
        assert!(matches!(
            parse_seed("not-a-url"),
            Err(UrlError::Parse(_))
        ));
        assert!(matches!(
            parse_seed("mailto:x@example.com"),
            Err(UrlError::MissingAuthority(_))
        ));
    }
}

//! ETag helpers for cheap revalidation of admin listings.
//!
//! The storage layer keeps a monotone revision counter bumped on every
//! mutation. Listings derived from the store are unchanged as long as the
//! revision is unchanged, so the revision doubles as a validator for
//! `If-None-Match` handling.

/// Generate an ETag for a store-derived listing.
///
/// Format: `"{resource}-v{revision}"` (with quotes, as required by HTTP spec)
///
/// # Example
/// ```
/// # use backend::http::etag::listing_etag;
/// let etag = listing_etag("jobs", 5);
/// assert_eq!(etag, r#""jobs-v5""#);
/// ```
pub fn listing_etag(resource: &str, revision: u64) -> String {
    format!(r#""{resource}-v{revision}""#)
}

/// Check a client's `If-None-Match` header value against the current ETag.
///
/// Accepts the `*` wildcard (RFC 9110: "any representation exists") and
/// comma-separated ETag lists.
pub fn if_none_match_matches(header_value: &str, etag: &str) -> bool {
    header_value.trim() == "*"
        || header_value
            .split(',')
            .map(str::trim)
            .any(|candidate| candidate == etag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_etag_format() {
        assert_eq!(listing_etag("jobs", 0), r#""jobs-v0""#);
        assert_eq!(listing_etag("jobs", 42), r#""jobs-v42""#);
    }

    #[test]
    fn test_exact_match() {
        let etag = listing_etag("jobs", 5);
        assert!(if_none_match_matches(&etag, &etag));
        assert!(!if_none_match_matches(r#""jobs-v4""#, &etag));
    }

    #[test]
    fn test_wildcard_match() {
        assert!(if_none_match_matches("*", r#""jobs-v1""#));
        assert!(if_none_match_matches(" * ", r#""jobs-v1""#));
    }

    #[test]
    fn test_list_match() {
        let etag = listing_etag("jobs", 7);
        assert!(if_none_match_matches(
            r#""jobs-v3", "jobs-v7""#,
            &etag
        ));
        assert!(!if_none_match_matches(r#""jobs-v3", "jobs-v4""#, &etag));
    }
}

//! Security response headers.
//!
//! # Responsibilities
//! - Provide the fixed set of recommended security headers
//! - Convert the set to an `http::HeaderMap`
//! - Attach the set to an Axum router as response-header layers
//!
//! # Design Decisions
//! - The set is a constant; no runtime customization
//! - Layers override any value a handler already set

use axum::http::{header, HeaderMap, HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

/// Recommended security headers, in order.
pub const SECURITY_HEADERS: [(&str, &str); 7] = [
    ("Strict-Transport-Security", "max-age=31536000; includeSubDomains"),
    ("X-Content-Type-Options", "nosniff"),
    ("X-Frame-Options", "DENY"),
    ("X-XSS-Protection", "1; mode=block"),
    ("Content-Security-Policy", "default-src 'self'"),
    ("Referrer-Policy", "strict-origin-when-cross-origin"),
    ("Permissions-Policy", "geolocation=(), microphone=(), camera=()"),
];

const PERMISSIONS_POLICY: HeaderName = HeaderName::from_static("permissions-policy");

/// The recommended header set as ordered name/value pairs.
pub fn security_headers() -> &'static [(&'static str, &'static str)] {
    &SECURITY_HEADERS
}

fn typed_headers() -> Vec<(HeaderName, HeaderValue)> {
    // Same order as SECURITY_HEADERS.
    let names = [
        header::STRICT_TRANSPORT_SECURITY,
        header::X_CONTENT_TYPE_OPTIONS,
        header::X_FRAME_OPTIONS,
        header::X_XSS_PROTECTION,
        header::CONTENT_SECURITY_POLICY,
        header::REFERRER_POLICY,
        PERMISSIONS_POLICY,
    ];
    names
        .into_iter()
        .zip(SECURITY_HEADERS)
        .map(|(name, (_, value))| (name, HeaderValue::from_static(value)))
        .collect()
}

/// The recommended header set as a `HeaderMap`.
pub fn security_header_map() -> HeaderMap {
    typed_headers().into_iter().collect()
}

/// Add every recommended security header to responses from `router`.
pub fn with_security_headers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    typed_headers()
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::overriding(name, value))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_count_and_values() {
        let headers = security_headers();
        assert_eq!(headers.len(), 7);
        assert_eq!(headers[0], ("Strict-Transport-Security", "max-age=31536000; includeSubDomains"));
        assert_eq!(headers[4], ("Content-Security-Policy", "default-src 'self'"));
        assert_eq!(headers[6].1, "geolocation=(), microphone=(), camera=()");
    }

    #[test]
    fn test_headers_stable_across_calls() {
        assert_eq!(security_headers(), security_headers());
    }

    #[test]
    fn test_typed_names_follow_table() {
        for ((name, value), (typed_name, typed_value)) in
            SECURITY_HEADERS.iter().zip(typed_headers())
        {
            assert!(typed_name.as_str().eq_ignore_ascii_case(name));
            assert_eq!(typed_value, *value);
        }
    }

    #[test]
    fn test_header_map() {
        let map = security_header_map();
        assert_eq!(map.len(), 7);
        assert_eq!(map.get("x-frame-options").unwrap(), "DENY");
        assert_eq!(map.get("Referrer-Policy").unwrap(), "strict-origin-when-cross-origin");
    }
}

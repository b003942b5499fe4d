//! Header utilities for upstream proxying
//!
//! Builds the outbound header set (stripping connection-scoped and credential
//! headers, injecting the chosen API key) and owns the fixed CORS header set
//! attached to every response this service originates.

use axum::http::header::{self, HeaderMap, HeaderName, HeaderValue};
use once_cell::sync::Lazy;

/// Inbound headers that must never be forwarded upstream
///
/// `HeaderName` is canonically lower-case, so membership checks here are
/// case-insensitive for any inbound spelling.
const STRIPPED_HEADERS: &[HeaderName] = &[
    header::HOST,
    header::CONTENT_LENGTH,
    header::AUTHORIZATION,
];

/// The fixed CORS header set
static CORS_HEADERS: Lazy<[(HeaderName, HeaderValue); 4]> = Lazy::new(|| {
    [
        (
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET,POST,OPTIONS,PUT,DELETE"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type,Authorization"),
        ),
        (
            header::ACCESS_CONTROL_EXPOSE_HEADERS,
            HeaderValue::from_static("Content-Length,Content-Type"),
        ),
    ]
});

/// Check if an inbound header must be dropped before forwarding
pub fn is_stripped_header(name: &HeaderName) -> bool {
    STRIPPED_HEADERS.contains(name)
}

/// Build the outbound header set for an upstream request
///
/// Copies every inbound header except the stripped set, then injects the
/// chosen API key as a bearer credential. Repeated inbound headers are
/// forwarded as a single comma-joined value.
pub fn build_outbound_headers(incoming: &HeaderMap, api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();

    for name in incoming.keys() {
        if is_stripped_header(name) {
            continue;
        }
        if let Some(value) = joined_value(incoming.get_all(name)) {
            headers.insert(name.clone(), value);
        }
    }

    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key)).expect("Invalid API key format"),
    );

    headers
}

/// Collapse every value of one header name into a single comma-joined value
fn joined_value(values: header::GetAll<'_, HeaderValue>) -> Option<HeaderValue> {
    let mut values = values.iter();
    let first = values.next()?;
    match values.next() {
        None => Some(first.clone()),
        Some(second) => {
            let mut joined = first.as_bytes().to_vec();
            for extra in std::iter::once(second).chain(values) {
                joined.extend_from_slice(b", ");
                joined.extend_from_slice(extra.as_bytes());
            }
            // comma and space are valid value bytes, so the join stays a valid value
            Some(HeaderValue::from_bytes(&joined).expect("Invalid joined header value"))
        }
    }
}

/// Insert the fixed CORS headers, overwriting any existing values
pub fn apply_cors_headers(headers: &mut HeaderMap) {
    for (name, value) in CORS_HEADERS.iter() {
        headers.insert(name.clone(), value.clone());
    }
}

//! Credential extraction from the Authorization header
//!
//! Clients supply one or more upstream API keys in the Authorization header,
//! comma-separated. One key is chosen uniformly at random per request, so a
//! browser client can spread traffic over several keys without server-side
//! state.

use axum::http::{header, HeaderMap};
use rand::seq::IndexedRandom;

/// Parse the credential portion of an Authorization header value into the
/// pool of candidate API keys.
///
/// The credential portion is everything after the first space; the scheme
/// token itself is not validated. A comma-separated portion yields one key
/// per non-empty trimmed piece.
pub fn parse_key_pool(auth_header: &str) -> Vec<String> {
    let Some((_scheme, rest)) = auth_header.split_once(' ') else {
        return Vec::new();
    };
    rest.split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .collect()
}

/// Choose the upstream API key for this request.
///
/// Returns `None` when the Authorization header is absent, not readable as
/// a string, or yields an empty key pool.
pub fn select_api_key(headers: &HeaderMap) -> Option<String> {
    let auth_header = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let pool = parse_key_pool(auth_header);
    pool.choose(&mut rand::rng()).cloned()
}

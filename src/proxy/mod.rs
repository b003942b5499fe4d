//! Proxy module
//!
//! Header construction and request forwarding to the upstream endpoint.

pub mod headers;
pub mod upstream;

pub use upstream::{UpstreamClient, CHAT_COMPLETIONS_URL};

//! Configuration management for proxygemini
//!
//! Configuration is loaded from environment variables. The upstream target
//! URL is a compile-time constant and deliberately has no environment knob.

use anyhow::{Context, Result};
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("PROXYGEMINI_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PROXYGEMINI_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid PROXYGEMINI_PORT")?,
        })
    }
}

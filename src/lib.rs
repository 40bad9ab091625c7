//! Affiliate-Link: outbound URL rewriting for affiliate programs
//!
//! This crate decides whether a URL belongs to a configured affiliate program and,
//! if so, rewrites it to carry the program's tracking data. Everything else passes
//! through untouched.

pub mod config;
pub mod processor;
pub mod providers;
pub mod url;

use thiserror::Error;

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid domain pattern: {0}")]
    InvalidPattern(String),
}

/// URL-specific errors
///
/// These never reach callers of [`Processor::process`]; they only explain why a URL
/// was passed through unchanged.
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Missing scheme in URL")]
    MissingScheme,

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Malformed URL: {0}")]
    Malformed(String),
}

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::AffiliateConfig;
pub use processor::Processor;
pub use crate::url::{domain_ends_with, parse_url, MatchPolicy, ParsedUrl};

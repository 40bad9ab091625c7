//! URL handling module for Affiliate-Link
//!
//! This module provides the raw URL codec, case-insensitive domain suffix matching,
//! and the query-string helpers the affiliate rules use to inject tracking data.

mod codec;
mod matcher;
mod query;

// Re-export main functions
pub use codec::parse_url;
pub use matcher::{domain_ends_with, MatchPolicy};
pub use query::{append_query_pair, has_query_key};

/// Structured view of a URL
///
/// Every component is kept exactly as it appeared in the input (no case folding,
/// no percent-decoding, no path normalization) so that [`ParsedUrl::serialize`]
/// reproduces the original bytes for anything a rule did not touch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedUrl {
    /// Scheme as written, without the trailing `:`
    pub scheme: String,

    /// Host as written; IPv6 literals keep their brackets
    pub host: String,

    /// Explicit port, if any
    pub port: Option<u16>,

    /// User name from the userinfo section
    pub user: Option<String>,

    /// Password from the userinfo section
    pub password: Option<String>,

    /// Path, possibly empty
    pub path: String,

    /// Raw query string without the leading `?`
    pub query: Option<String>,

    /// Raw fragment without the leading `#`
    pub fragment: Option<String>,
}

impl ParsedUrl {
    /// Returns true if the URL carries a non-empty query string
    pub fn has_query(&self) -> bool {
        self.query.as_deref().is_some_and(|q| !q.is_empty())
    }

    /// Returns true if the scheme is exactly `http` or `https`
    ///
    /// The comparison is case-sensitive: `HTTP://` is not eligible for rewriting.
    pub fn is_http(&self) -> bool {
        self.scheme == "http" || self.scheme == "https"
    }

    /// Returns a copy of this URL with `key=value` appended to its query string
    ///
    /// No other component is modified.
    pub fn with_query_pair(&self, key: &str, value: &str) -> ParsedUrl {
        ParsedUrl {
            query: Some(append_query_pair(self.query.as_deref(), key, value)),
            ..self.clone()
        }
    }
}

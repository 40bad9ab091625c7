//! Affiliate provider rules
//!
//! Each affiliate network gets one [`AffiliateRule`]. A rule answers two questions:
//! does it claim a host, and what does a claimed URL become. Rules re-check their
//! own claim inside [`AffiliateRule::rewrite`], so calling one directly on a URL it
//! does not own is harmless.
//!
//! # Strategies
//!
//! - `AmazonRule`: direct tag, appends `tag=<tracking-code>` once
//! - `RakutenRule`: redirect wrapper, replaces the URL with a deep link
//! - `ZazzleRule`: direct tag, appends `rf=<affiliate-id>`

mod amazon;
mod rakuten;
mod zazzle;

pub use amazon::AmazonRule;
pub use rakuten::RakutenRule;
pub use zazzle::ZazzleRule;

use crate::url::ParsedUrl;

/// A rewrite strategy for one affiliate provider
pub trait AffiliateRule: Send + Sync {
    /// Short provider name used in logs and diagnostics
    fn name(&self) -> &'static str;

    /// Returns true if this provider owns URLs on `host`
    ///
    /// Claiming a host does not imply the provider is configured: an unconfigured
    /// provider still claims its hosts and then leaves the URL unchanged.
    fn claims(&self, host: &str) -> bool;

    /// Rewrites `url` for this provider
    ///
    /// `parts` must be the parsed form of `url`. Returns `url` unchanged when the
    /// rule does not apply.
    fn rewrite(&self, url: &str, parts: &ParsedUrl) -> String;
}

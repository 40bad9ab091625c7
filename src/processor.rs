//! URL dispatch
//!
//! The [`Processor`] owns the configured rules and routes each URL to at most one
//! of them.

use crate::config::AffiliateConfig;
use crate::providers::{AffiliateRule, AmazonRule, RakutenRule, ZazzleRule};
use crate::url::{parse_url, ParsedUrl};

/// Rewrites outbound URLs into affiliate-tagged equivalents
///
/// Built once from an [`AffiliateConfig`] and read-only afterwards, so a single
/// `Processor` can be shared across threads.
///
/// # Examples
///
/// ```
/// use affiliate_link::config::{AffiliateConfig, AmazonConfig};
/// use affiliate_link::Processor;
///
/// let processor = Processor::new(AffiliateConfig {
///     amazon: Some(AmazonConfig {
///         tracking_code: "mytag-20".to_string(),
///         ..AmazonConfig::default()
///     }),
///     ..AffiliateConfig::default()
/// });
///
/// assert_eq!(
///     processor.process("https://www.amazon.com/dp/B000?ref=abc"),
///     "https://www.amazon.com/dp/B000?ref=abc&tag=mytag-20"
/// );
/// assert_eq!(processor.process("https://example.org/page"), "https://example.org/page");
/// ```
pub struct Processor {
    rules: Vec<Box<dyn AffiliateRule>>,
}

impl Processor {
    /// Creates a processor from a configuration
    ///
    /// Rules are consulted in a fixed priority order: Amazon, Rakuten, Zazzle.
    pub fn new(config: AffiliateConfig) -> Self {
        let policy = config.match_policy;

        let rules: Vec<Box<dyn AffiliateRule>> = vec![
            Box::new(AmazonRule::new(config.amazon, policy)),
            Box::new(RakutenRule::new(config.rakuten, policy)),
            Box::new(ZazzleRule::new(config.zazzle, policy)),
        ];

        Self { rules }
    }

    /// Names of the rules in priority order
    pub fn rules(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    /// Rewrites a single URL
    ///
    /// Returns the input unchanged when it cannot be parsed, has no host, carries a
    /// fragment, is not `http`/`https`, or belongs to no provider. Otherwise the
    /// first provider claiming the host decides the result, even if that provider
    /// is not configured.
    pub fn process(&self, url: &str) -> String {
        let Some(parts) = eligible_parts(url) else {
            return url.to_string();
        };

        match self.rules.iter().find(|rule| rule.claims(&parts.host)) {
            Some(rule) => {
                let rewritten = rule.rewrite(url, &parts);
                if rewritten != url {
                    tracing::debug!("{} rewrote {} -> {}", rule.name(), url, rewritten);
                }
                rewritten
            }
            None => {
                tracing::trace!("No affiliate program for {}", url);
                url.to_string()
            }
        }
    }

    /// Rewrites a batch of URLs, preserving order
    pub fn process_all<'a, I>(&self, urls: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        urls.into_iter().map(|url| self.process(url)).collect()
    }
}

/// Parses `url` and applies the eligibility checks shared by every provider
fn eligible_parts(url: &str) -> Option<ParsedUrl> {
    let parts = match parse_url(url) {
        Ok(parts) => parts,
        Err(e) => {
            tracing::trace!("Passing through {}: {}", url, e);
            return None;
        }
    };

    let reason = if parts.host.is_empty() {
        "empty host"
    } else if parts.fragment.is_some() {
        "has a fragment"
    } else if !parts.is_http() {
        "not http or https"
    } else {
        return Some(parts);
    };

    tracing::trace!("Passing through {}: {}", url, reason);
    None
}

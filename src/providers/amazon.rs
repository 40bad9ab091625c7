use crate::config::AmazonConfig;
use crate::providers::AffiliateRule;
use crate::url::{domain_ends_with, has_query_key, MatchPolicy, ParsedUrl};

/// Storefront always owned by the Amazon rule
const AMAZON_DOMAIN: &str = "amazon.com";

/// Query parameter carrying the Associates tracking code
const TAG_PARAM: &str = "tag";

/// Amazon Associates: appends `tag=<tracking-code>` to the query string
///
/// The tag is added at most once. If any query parameter is already named `tag`
/// the query is left alone, which makes the rule idempotent.
#[derive(Debug, Clone)]
pub struct AmazonRule {
    tracking_code: Option<String>,
    domains: Vec<String>,
    policy: MatchPolicy,
}

impl AmazonRule {
    /// Creates the rule from the (possibly absent) Amazon section
    pub fn new(config: Option<AmazonConfig>, policy: MatchPolicy) -> Self {
        let mut domains = vec![AMAZON_DOMAIN.to_string()];
        let mut tracking_code = None;

        if let Some(config) = config {
            if config.is_active() {
                tracking_code = Some(config.tracking_code);
            }
            domains.extend(config.marketplaces);
        }

        Self {
            tracking_code,
            domains,
            policy,
        }
    }
}

impl AffiliateRule for AmazonRule {
    fn name(&self) -> &'static str {
        "amazon"
    }

    fn claims(&self, host: &str) -> bool {
        self.domains
            .iter()
            .any(|domain| domain_ends_with(host, domain, self.policy))
    }

    fn rewrite(&self, url: &str, parts: &ParsedUrl) -> String {
        let Some(code) = &self.tracking_code else {
            tracing::trace!("Amazon is not configured; leaving {} unchanged", url);
            return url.to_string();
        };

        if !self.claims(&parts.host) {
            return url.to_string();
        }

        if parts
            .query
            .as_deref()
            .is_some_and(|query| has_query_key(query, TAG_PARAM))
        {
            tracing::trace!("{} already carries a tag parameter", url);
            return url.to_string();
        }

        parts.with_query_pair(TAG_PARAM, code).serialize()
    }
}

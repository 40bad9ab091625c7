use crate::config::ZazzleConfig;
use crate::providers::AffiliateRule;
use crate::url::{domain_ends_with, MatchPolicy, ParsedUrl};

const ZAZZLE_DOMAIN: &str = "zazzle.com";

/// Query parameter carrying the Zazzle referral id
const REFERRAL_PARAM: &str = "rf";

/// Zazzle Associates: appends `rf=<affiliate-id>` to the query string
///
/// Unlike the Amazon rule there is no duplicate check; running the rule twice
/// appends `rf=` twice.
#[derive(Debug, Clone)]
pub struct ZazzleRule {
    affiliate_id: Option<String>,
    policy: MatchPolicy,
}

impl ZazzleRule {
    /// Creates the rule from the (possibly absent) Zazzle section
    pub fn new(config: Option<ZazzleConfig>, policy: MatchPolicy) -> Self {
        Self {
            affiliate_id: config
                .filter(ZazzleConfig::is_active)
                .map(|c| c.affiliate_id),
            policy,
        }
    }
}

impl AffiliateRule for ZazzleRule {
    fn name(&self) -> &'static str {
        "zazzle"
    }

    fn claims(&self, host: &str) -> bool {
        domain_ends_with(host, ZAZZLE_DOMAIN, self.policy)
    }

    fn rewrite(&self, url: &str, parts: &ParsedUrl) -> String {
        match &self.affiliate_id {
            Some(id) if self.claims(&parts.host) => {
                parts.with_query_pair(REFERRAL_PARAM, id).serialize()
            }
            Some(_) => url.to_string(),
            None => {
                tracing::trace!("Zazzle is not configured; leaving {} unchanged", url);
                url.to_string()
            }
        }
    }
}

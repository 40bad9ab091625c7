use crate::config::{ProgramEntry, RakutenConfig};
use crate::providers::AffiliateRule;
use crate::url::{domain_ends_with, MatchPolicy, ParsedUrl};
use url::form_urlencoded;

/// Deep-link hosts, chosen by the merchant host
const RAKUTEN_BASE: &str = "http://affiliate.rakuten.com/";
const WALMART_BASE: &str = "http://linksynergy.walmart.com/";
const LINKSYNERGY_BASE: &str = "http://click.linksynergy.com/";

/// Rakuten Advertising: replaces the URL with a LinkShare deep link
///
/// Programs are tried in configured order and the first whose domain matches the
/// host wins. The result is
/// `<base>/deeplink?id=<affiliate-code>&mid=<mid>&murl=<encoded original URL>`;
/// nothing of the input survives except inside `murl`.
#[derive(Debug, Clone)]
pub struct RakutenRule {
    affiliate_code: String,
    programs: Vec<ProgramEntry>,
    policy: MatchPolicy,
}

impl RakutenRule {
    /// Creates the rule from the (possibly absent) Rakuten section
    ///
    /// An inactive section yields a rule with no programs, which claims nothing.
    pub fn new(config: Option<RakutenConfig>, policy: MatchPolicy) -> Self {
        match config.filter(RakutenConfig::is_active) {
            Some(config) => Self {
                affiliate_code: config.affiliate_code,
                programs: config.programs,
                policy,
            },
            None => Self {
                affiliate_code: String::new(),
                programs: Vec::new(),
                policy,
            },
        }
    }

    /// Returns the first program whose domain matches `host`
    fn program_for(&self, host: &str) -> Option<&ProgramEntry> {
        self.programs
            .iter()
            .find(|program| domain_ends_with(host, &program.domain, self.policy))
    }

    /// Picks the deep-link base for a merchant host
    fn link_base(&self, host: &str) -> &'static str {
        if domain_ends_with(host, "rakuten.com", self.policy) {
            RAKUTEN_BASE
        } else if domain_ends_with(host, "walmart.com", self.policy) {
            WALMART_BASE
        } else {
            LINKSYNERGY_BASE
        }
    }
}

impl AffiliateRule for RakutenRule {
    fn name(&self) -> &'static str {
        "rakuten"
    }

    fn claims(&self, host: &str) -> bool {
        self.program_for(host).is_some()
    }

    fn rewrite(&self, url: &str, parts: &ParsedUrl) -> String {
        let Some(program) = self.program_for(&parts.host) else {
            return url.to_string();
        };

        format!(
            "{}/deeplink?id={}&mid={}&murl={}",
            self.link_base(&parts.host),
            encode(&self.affiliate_code),
            encode(&program.mid),
            encode(url)
        )
    }
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

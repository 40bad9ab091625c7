use crate::url::MatchPolicy;
use serde::Deserialize;

/// Main configuration structure for Affiliate-Link
///
/// Every provider section is optional. A section that is present but carries no
/// usable code is inactive and behaves exactly like an absent one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AffiliateConfig {
    /// How hosts are compared against configured domains
    #[serde(rename = "match-policy", default)]
    pub match_policy: MatchPolicy,

    #[serde(default, alias = "amazon.com")]
    pub amazon: Option<AmazonConfig>,

    #[serde(default, alias = "RAKUTEN")]
    pub rakuten: Option<RakutenConfig>,

    #[serde(default, alias = "zazzle.com")]
    pub zazzle: Option<ZazzleConfig>,
}

/// Amazon Associates configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AmazonConfig {
    /// Associate tag appended as `tag=<code>`
    #[serde(rename = "tracking-code", default)]
    pub tracking_code: String,

    /// Additional storefront suffixes (e.g. "amazon.co.uk") claimed besides amazon.com
    #[serde(default)]
    pub marketplaces: Vec<String>,
}

impl AmazonConfig {
    /// Returns true if a tracking code is set
    pub fn is_active(&self) -> bool {
        !self.tracking_code.is_empty()
    }
}

/// Rakuten Advertising (LinkShare) configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RakutenConfig {
    /// Publisher id sent as `id=` on every deep link
    #[serde(rename = "affiliate-code", default)]
    pub affiliate_code: String,

    /// Merchant programs, tried in order
    #[serde(default)]
    pub programs: Vec<ProgramEntry>,
}

impl RakutenConfig {
    /// Returns true if an affiliate code and at least one program are set
    pub fn is_active(&self) -> bool {
        !self.affiliate_code.is_empty() && !self.programs.is_empty()
    }
}

/// One merchant in a Rakuten program table
#[derive(Debug, Clone, Deserialize)]
pub struct ProgramEntry {
    /// Merchant domain suffix (e.g. "walmart.com")
    pub domain: String,

    /// Merchant id sent as `mid=`
    pub mid: String,
}

/// Zazzle Associates configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZazzleConfig {
    /// Referral id appended as `rf=<id>`
    #[serde(rename = "affiliate-id", alias = "affiliateID", default)]
    pub affiliate_id: String,
}

impl ZazzleConfig {
    /// Returns true if an affiliate id is set
    pub fn is_active(&self) -> bool {
        !self.affiliate_id.is_empty()
    }
}

use serde::Deserialize;

/// How a host is compared against a configured domain suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPolicy {
    /// The suffix must be the whole host or be preceded by a `.`
    ///
    /// `www.amazon.com` matches `amazon.com`; `evilamazon.com` does not.
    #[default]
    LabelBoundary,

    /// Plain trailing-characters comparison
    ///
    /// `evilamazon.com` matches `amazon.com`.
    RawSuffix,
}

/// Checks if a host ends with a domain suffix, ignoring ASCII case
///
/// The empty suffix matches every host under both policies. A suffix longer than
/// the host never matches.
///
/// # Arguments
///
/// * `host` - The host to test, in any case
/// * `suffix` - The configured domain suffix, in any case
/// * `policy` - Whether a label boundary is required before the suffix
///
/// # Examples
///
/// ```
/// use affiliate_link::url::{domain_ends_with, MatchPolicy};
///
/// assert!(domain_ends_with("WWW.AMAZON.COM", "amazon.com", MatchPolicy::LabelBoundary));
/// assert!(domain_ends_with("amazon.com", "amazon.com", MatchPolicy::LabelBoundary));
/// assert!(!domain_ends_with("evilamazon.com", "amazon.com", MatchPolicy::LabelBoundary));
/// assert!(domain_ends_with("evilamazon.com", "amazon.com", MatchPolicy::RawSuffix));
/// ```
pub fn domain_ends_with(host: &str, suffix: &str, policy: MatchPolicy) -> bool {
    if suffix.is_empty() {
        return true;
    }

    let host = host.as_bytes();
    let suffix = suffix.as_bytes();

    let Some(start) = host.len().checked_sub(suffix.len()) else {
        return false;
    };

    if !host[start..].eq_ignore_ascii_case(suffix) {
        return false;
    }

    match policy {
        MatchPolicy::RawSuffix => true,
        MatchPolicy::LabelBoundary => start == 0 || host[start - 1] == b'.',
    }
}

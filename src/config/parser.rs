use crate::config::types::AffiliateConfig;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(AffiliateConfig)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use affiliate_link::config::load_config;
///
/// let config = load_config(Path::new("affiliates.toml")).unwrap();
/// println!("Amazon configured: {}", config.amazon.is_some());
/// ```
pub fn load_config(path: &Path) -> Result<AffiliateConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
///
/// # Example
///
/// ```
/// use affiliate_link::config::parse_config;
///
/// let config = parse_config(r#"
/// [amazon]
/// tracking-code = "mytag-20"
/// "#).unwrap();
/// assert_eq!(config.amazon.unwrap().tracking_code, "mytag-20");
/// ```
pub fn parse_config(content: &str) -> Result<AffiliateConfig, ConfigError> {
    let config: AffiliateConfig = toml::from_str(content)?;

    validate(&config)?;

    Ok(config)
}

/// Returns the hex SHA-256 fingerprint of configuration text
///
/// Logged at startup so a rewritten link can be traced back to the exact
/// configuration that produced it.
///
/// # Example
///
/// ```
/// use affiliate_link::config::config_fingerprint;
///
/// assert_eq!(
///     config_fingerprint(""),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
pub fn config_fingerprint(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}

/// Fingerprints a configuration file without parsing it
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    Ok(config_fingerprint(&std::fs::read_to_string(path)?))
}

/// Loads a configuration together with the fingerprint of the bytes it was parsed from
///
/// The file is read once, so the fingerprint always describes the parsed text.
pub fn load_config_with_hash(path: &Path) -> Result<(AffiliateConfig, String), ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    Ok((config, config_fingerprint(&content)))
}

use crate::config::types::{AffiliateConfig, AmazonConfig, RakutenConfig, ZazzleConfig};
use crate::ConfigError;

/// Validates the entire configuration
///
/// Sections without a usable code are not errors; they are reported and left
/// inactive.
pub fn validate(config: &AffiliateConfig) -> Result<(), ConfigError> {
    if let Some(amazon) = &config.amazon {
        validate_amazon_config(amazon)?;
    }
    if let Some(rakuten) = &config.rakuten {
        validate_rakuten_config(rakuten)?;
    }
    if let Some(zazzle) = &config.zazzle {
        validate_zazzle_config(zazzle)?;
    }
    Ok(())
}

/// Validates Amazon configuration
fn validate_amazon_config(config: &AmazonConfig) -> Result<(), ConfigError> {
    if !config.is_active() {
        tracing::warn!("[amazon] has no tracking-code; Amazon links will not be tagged");
    }

    validate_code("tracking-code", &config.tracking_code)?;

    for marketplace in &config.marketplaces {
        validate_domain_string(marketplace)?;
    }

    Ok(())
}

/// Validates Rakuten configuration
fn validate_rakuten_config(config: &RakutenConfig) -> Result<(), ConfigError> {
    if !config.is_active() {
        tracing::warn!(
            "[rakuten] needs an affiliate-code and at least one program; Rakuten links will not be rewritten"
        );
    }

    validate_code("affiliate-code", &config.affiliate_code)?;

    for program in &config.programs {
        validate_domain_string(&program.domain)?;

        if program.mid.is_empty() {
            return Err(ConfigError::Validation(format!(
                "Rakuten program '{}' must have a mid",
                program.domain
            )));
        }
        validate_code("mid", &program.mid)?;
    }

    Ok(())
}

/// Validates Zazzle configuration
fn validate_zazzle_config(config: &ZazzleConfig) -> Result<(), ConfigError> {
    if !config.is_active() {
        tracing::warn!("[zazzle] has no affiliate-id; Zazzle links will not be tagged");
    }

    validate_code("affiliate-id", &config.affiliate_id)
}

/// Validates a tracking code or id value
fn validate_code(field: &str, value: &str) -> Result<(), ConfigError> {
    if value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '&' | '#' | '?'))
    {
        return Err(ConfigError::Validation(format!(
            "{} must not contain whitespace, '&', '#' or '?', got '{}'",
            field, value
        )));
    }

    Ok(())
}

/// Validates a merchant domain suffix
fn validate_domain_string(domain: &str) -> Result<(), ConfigError> {
    if domain.is_empty() {
        return Err(ConfigError::InvalidPattern(
            "Domain cannot be empty".to_string(),
        ));
    }

    // Check for invalid characters
    if !domain
        .chars()
        .all(|c| c.is_alphanumeric() || c == '.' || c == '-')
    {
        return Err(ConfigError::InvalidPattern(format!(
            "Domain '{}' contains invalid characters",
            domain
        )));
    }

    // Check that it doesn't start or end with a dot or hyphen
    if domain.starts_with('.')
        || domain.ends_with('.')
        || domain.starts_with('-')
        || domain.ends_with('-')
    {
        return Err(ConfigError::InvalidPattern(format!(
            "Domain '{}' cannot start or end with '.' or '-'",
            domain
        )));
    }

    // Check for consecutive dots
    if domain.contains("..") {
        return Err(ConfigError::InvalidPattern(format!(
            "Domain '{}' cannot contain consecutive dots",
            domain
        )));
    }

    Ok(())
}

//! Configuration module for Affiliate-Link
//!
//! This module defines the typed affiliate configuration and handles loading,
//! parsing, and validating it from TOML. The rewriting core only ever sees an
//! already-built [`AffiliateConfig`]; loading is for hosts such as the CLI.
//!
//! # Example
//!
//! ```no_run
//! use affiliate_link::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("affiliates.toml")).unwrap();
//! println!("Match policy: {:?}", config.match_policy);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{AffiliateConfig, AmazonConfig, ProgramEntry, RakutenConfig, ZazzleConfig};

// Re-export parser functions
pub use parser::{
    compute_config_hash, config_fingerprint, load_config, load_config_with_hash, parse_config,
};

//! Affiliate-Link main entry point
//!
//! This is the command-line interface for the affiliate URL rewriter.

use affiliate_link::config::{load_config_with_hash, AffiliateConfig};
use affiliate_link::Processor;
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Affiliate-Link: rewrite outbound URLs into affiliate links
///
/// Each URL is checked against the configured affiliate programs and printed,
/// rewritten if a program claims it and unchanged otherwise. URLs are read from
/// the command line, or one per line from stdin when none are given.
#[derive(Parser, Debug)]
#[command(name = "affiliate-link")]
#[command(version)]
#[command(about = "Rewrite outbound URLs into affiliate links", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// URLs to rewrite (read from stdin if omitted)
    #[arg(value_name = "URL")]
    urls: Vec<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config, show the active programs, and exit
    #[arg(long, conflicts_with = "urls")]
    check: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    if cli.check {
        print_check(&config);
        return Ok(());
    }

    let processor = Processor::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.urls.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read URL from stdin")?;
            let url = line.trim();
            if url.is_empty() {
                continue;
            }
            writeln!(out, "{}", processor.process(url))?;
        }
    } else {
        for url in &cli.urls {
            writeln!(out, "{}", processor.process(url))?;
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout carries only rewritten URLs.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("affiliate_link=warn"),
            1 => EnvFilter::new("affiliate_link=info,warn"),
            2 => EnvFilter::new("affiliate_link=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles --check: prints what the configuration will do
fn print_check(config: &AffiliateConfig) {
    println!("=== Affiliate-Link Configuration ===\n");
    println!("Match policy: {:?}", config.match_policy);

    println!("\nAmazon:");
    match &config.amazon {
        Some(amazon) if amazon.is_active() => {
            println!("  Tracking code: {}", amazon.tracking_code);
            println!("  Storefronts: amazon.com");
            for marketplace in &amazon.marketplaces {
                println!("    * {}", marketplace);
            }
        }
        _ => println!("  (inactive)"),
    }

    println!("\nRakuten:");
    match &config.rakuten {
        Some(rakuten) if rakuten.is_active() => {
            println!("  Affiliate code: {}", rakuten.affiliate_code);
            println!("  Programs ({}):", rakuten.programs.len());
            for program in &rakuten.programs {
                println!("    * {} (mid {})", program.domain, program.mid);
            }
        }
        _ => println!("  (inactive)"),
    }

    println!("\nZazzle:");
    match &config.zazzle {
        Some(zazzle) if zazzle.is_active() => println!("  Affiliate id: {}", zazzle.affiliate_id),
        _ => println!("  (inactive)"),
    }

    println!("\n✓ Configuration is valid");
}

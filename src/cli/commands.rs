//! CLI command definitions and handlers.
//!
//! Each subcommand is implemented as a function that takes the parsed arguments
//! and returns an `anyhow::Result<()>`. A failed resolution is not a CLI
//! failure: it prints the unresolved record like any other.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;
use tracing::debug;

use crate::classifier;
use crate::config::{self, Config};
use crate::error::{Error, Result, ResultExt};
use crate::resolver::{MusicResolver, ResolvedMusic};

/// Track Resolver CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Lookup service endpoint (overrides config)
    #[arg(long, global = true, env = "TRACK_RESOLVER_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Lookup timeout in seconds (overrides config)
    #[arg(long, global = true, env = "TRACK_RESOLVER_TIMEOUT")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the platform song id in a reference, if any
    Classify {
        /// Share link or direct link
        reference: String,
    },
    /// Resolve references into playable links
    Resolve {
        /// Share links or direct links
        #[arg(required = true)]
        references: Vec<String>,
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config file actions
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the config file location
    Path,
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run the selected command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Classify { reference } => cmd_classify(reference),
        Commands::Resolve { references, json } => {
            let rt = Runtime::new()?;
            cmd_resolve(&rt, cli, references, *json)
        }
        Commands::Config { action } => cmd_config(cli, action),
    }
}

/// Load the config file and apply command-line overrides
fn effective_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => config::load_from(path),
        None => config::load(),
    };

    if let Some(endpoint) = &cli.endpoint {
        config.lookup.endpoint = endpoint.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.lookup.timeout_secs = timeout;
    }

    if config.lookup.timeout_secs == 0 {
        return Err(Error::invalid_setting("lookup timeout must be at least 1 second"));
    }
    if config.lookup.endpoint.is_empty() {
        return Err(Error::invalid_setting("lookup endpoint is empty"));
    }

    debug!("Effective config: {:?}", config);
    Ok(config)
}

fn cmd_classify(reference: &str) -> anyhow::Result<()> {
    match classifier::classify(reference) {
        Some(id) => println!("{}: {}", id.platform(), id),
        None => println!("no platform identifier (direct link)"),
    }
    Ok(())
}

fn cmd_resolve(rt: &Runtime, cli: &Cli, references: &[String], json: bool) -> anyhow::Result<()> {
    let config = effective_config(cli)?;
    let resolver = MusicResolver::new(&config.lookup).with_context("creating lookup client")?;

    let resolved = rt.block_on(resolver.resolve_all(references));

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    for (reference, music) in references.iter().zip(&resolved) {
        print_resolved(reference, music);
    }
    Ok(())
}

fn print_resolved(reference: &str, music: &ResolvedMusic) {
    let marker = if music.is_playable() { "✓" } else { "✗" };
    println!("{} {}", marker, reference);
    println!("  Track:  {}", music.summary());
    if music.is_playable() {
        println!("  URL:    {}", music.url);
    } else {
        println!("  URL:    (unresolved)");
    }
    println!("  Cover:  {}", music.cover);
    println!();
}

fn cmd_config(cli: &Cli, action: &ConfigAction) -> anyhow::Result<()> {
    match action {
        ConfigAction::Path => {
            match cli.config.clone().or_else(config::config_path) {
                Some(path) => println!("{}", path.display()),
                None => println!("(no config directory on this platform)"),
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = effective_config(cli)?;
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigAction::Init { force } => {
            let path = match &cli.config {
                Some(path) => path.clone(),
                None => config::config_path().ok_or(config::ConfigError::NoConfigDir)?,
            };
            if path.exists() && !force {
                anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
            }
            config::save_to(&Config::default(), &path).with_context("writing default config")?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}

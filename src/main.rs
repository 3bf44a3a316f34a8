//! sitemeta - print, check and scaffold the site configuration table.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, Format};
use serde::Serialize;
use sitemeta::{
    config::{SiteConfig, cfg, init_config},
    init::write_default_config,
    log,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log!("error"; "{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    init_config(load_config(cli)?)?;
    let config = cfg();

    match &cli.command {
        Commands::Show { format } => print(config, *format),
        Commands::Page { page, format } => print(config.page(*page), *format),
        Commands::Limit { collection } => {
            println!("{}", config.homepage_limit(*collection));
            Ok(())
        }
        Commands::Check => {
            // load_config already validated
            log!("check"; "ok");
            Ok(())
        }
        Commands::Init { path } => {
            let written = write_default_config(path)?;
            log!("init"; "wrote {}", written.display());
            Ok(())
        }
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let path = cli.config.as_deref();
    let config = SiteConfig::load(path).with_context(|| match path {
        Some(path) => format!("invalid config `{}`", path.display()),
        None => "invalid built-in config".to_owned(),
    })?;

    if let Some(path) = path {
        log!("config"; "loaded {}", path.display());
    }
    Ok(config)
}

fn print<T: Serialize>(value: &T, format: Format) -> Result<()> {
    let out = match format {
        Format::Toml => toml::to_string_pretty(value)?,
        Format::Json => serde_json::to_string_pretty(value)?,
    };
    println!("{}", out.trim_end());
    Ok(())
}

//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand, ValueEnum};
use sitemeta::{Collection, Page};
use std::path::PathBuf;

/// Site identity and page metadata
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// TOML file overriding the built-in table (e.g. site.toml)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for printed records
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Toml,
    Json,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the effective site table
    Show {
        #[arg(short, long, value_enum, default_value_t)]
        format: Format,
    },

    /// Print one page's title and description
    Page {
        /// home, blog, work or projects
        page: Page,

        #[arg(short, long, value_enum, default_value_t)]
        format: Format,
    },

    /// Print how many items of a collection the homepage shows
    Limit {
        /// posts, works or projects
        collection: Collection,
    },

    /// Validate the effective configuration
    Check,

    /// Write the built-in table to site.toml
    Init {
        /// directory to write into
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_page() {
        let cli = Cli::parse_from(["sitemeta", "page", "Work", "--format", "json"]);
        match cli.command {
            Commands::Page { page, format } => {
                assert_eq!(page, Page::Work);
                assert_eq!(format, Format::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_unknown_page_fails() {
        assert!(Cli::try_parse_from(["sitemeta", "page", "about"]).is_err());
    }

    #[test]
    fn test_parse_limit_with_config() {
        let cli = Cli::parse_from(["sitemeta", "-C", "site.toml", "limit", "posts"]);
        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
        assert!(matches!(
            cli.command,
            Commands::Limit {
                collection: Collection::Posts
            }
        ));
    }

    #[test]
    fn test_parse_init_default_path() {
        let cli = Cli::parse_from(["sitemeta", "init"]);
        assert!(matches!(cli.command, Commands::Init { ref path } if path == &PathBuf::from(".")));
    }

    #[test]
    fn test_show_defaults_to_toml() {
        let cli = Cli::parse_from(["sitemeta", "show"]);
        assert!(matches!(cli.command, Commands::Show { format: Format::Toml }));
    }
}

//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Config file to load
//! - `--org`, `--base-domain`, `--base-package`, `--output`, `--api-base`:
//!   Override config file values
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::Parser;
use std::path::PathBuf;

use crate::core::config::Overrides;

/// govanity - Generate go-import vanity pages for a GitHub organization
#[derive(Parser, Debug)]
#[command(name = "govanity")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
The API token is read from the GITHUB_TOKEN environment variable.

EXAMPLES:
    # Generate pages for an organization into ./public
    GITHUB_TOKEN=ghp_... govanity --org blksails --base-domain pkg.blksails.net

    # Use a config file and a different output directory
    govanity --config govanity.toml --output site")]
pub struct Cli {
    /// Config file (default: $GOVANITY_CONFIG, ./govanity.toml, user config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Organization whose repositories are scanned
    #[arg(long)]
    pub org: Option<String>,

    /// Domain serving the pages; stripped from import paths to form directories
    #[arg(long, value_name = "DOMAIN")]
    pub base_domain: Option<String>,

    /// Prefix a module path must start with (default: the base domain)
    #[arg(long, value_name = "PREFIX")]
    pub base_package: Option<String>,

    /// Output directory for generated pages (default: public)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// GitHub API base URL (for GitHub Enterprise)
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Config overrides given on the command line.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            org: self.org.clone(),
            base_domain: self.base_domain.clone(),
            base_package: self.base_package.clone(),
            output_dir: self.output.clone(),
            api_base: self.api_base.clone(),
        }
    }
}

//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments
//! - Load and resolve configuration (fatal on missing token)
//! - Set up logging and the async runtime
//! - Wire the GitHub provider, HTML renderer and filesystem sink into the
//!   [`crate::engine`] and report the result
//!
//! The CLI layer is thin. It performs no pipeline logic itself.

pub mod args;

pub use args::Cli;

use anyhow::{Context as _, Result};

use crate::core::config::{Config, Settings, TOKEN_ENV};
use crate::engine::{GenerateOptions, Generator, RunOutput};
use crate::forge::GitHubProvider;
use crate::render::HtmlRenderer;
use crate::site::FsSink;
use crate::ui::logging::init_logging;
use crate::ui::output::{self, Verbosity};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    let loaded = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    init_logging(loaded.config.file.log_filter.as_deref(), verbosity);

    if let Some(path) = loaded.config.loaded_from() {
        tracing::debug!(path = %path.display(), "loaded config");
    }

    let settings = loaded
        .config
        .resolve(cli.overrides(), std::env::var(TOKEN_ENV).ok())?;
    tracing::debug!(?settings, "resolved settings");

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let result = rt.block_on(generate(&settings))?;

    output::print(
        output::format_summary(&result.registry, &result.report),
        verbosity,
    );

    let problems: Vec<String> = result
        .report
        .skipped()
        .filter(|(_, reason)| !reason.is_expected())
        .map(|(repo, reason)| format!("{}: {}", repo, reason))
        .chain(result.report.write_failures.iter().map(|f| {
            format!(
                "{}: {}",
                f.import_path.as_deref().unwrap_or("index"),
                f.message
            )
        }))
        .collect();
    if !problems.is_empty() {
        output::print(
            format!("Problems:\n{}", output::format_list(&problems, "  - ")),
            verbosity,
        );
    }

    Ok(())
}

/// Generate the site described by `settings`.
///
/// # Errors
///
/// Fails only if the repository listing fails.
pub async fn generate(settings: &Settings) -> Result<RunOutput> {
    let provider = GitHubProvider::with_api_base(settings.token(), &settings.api_base);
    let mut sink = FsSink::new(&settings.output_dir, &settings.base_domain);
    let mut generator = Generator::new(
        &provider,
        &HtmlRenderer,
        &mut sink,
        GenerateOptions::from_settings(settings),
    );

    let output = generator.run().await?;
    Ok(output)
}

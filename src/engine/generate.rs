//! engine::generate
//!
//! The generation pipeline.
//!
//! # Lifecycle
//!
//! ```text
//! list repositories (fatal on failure)
//!   for each repository, in listing order:
//!     language gate -> fetch go.mod -> parse -> prefix gate
//!       -> list files -> expand -> registry insert -> render -> write
//! render index from registry -> write
//! ```
//!
//! One repository is fully processed before the next begins. Every
//! per-repository failure becomes a [`SkipReason`] and the loop continues.

use tracing::{debug, error, info, warn};

use super::report::{Outcome, RepoOutcome, RunReport, SkipReason, WriteFailure};
use crate::core::config::Settings;
use crate::core::expand::expand;
use crate::core::filter::{has_base_prefix, qualifies};
use crate::core::manifest::{decode_manifest, parse_module_name, MANIFEST_PATH};
use crate::core::registry::Registry;
use crate::core::types::{PackageRecord, Repository};
use crate::forge::{ForgeError, RepoProvider};
use crate::render::{IndexContext, Renderer};
use crate::site::PageSink;

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to list repositories for '{org}': {source}")]
    ListRepositories { org: String, source: ForgeError },
}

/// What the pipeline needs to know about the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Organization to scan
    pub org: String,
    /// Prefix a module identifier must carry
    pub base_package: String,
    /// Domain serving the pages
    pub base_domain: String,
}

impl GenerateOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            org: settings.org.clone(),
            base_package: settings.base_package.clone(),
            base_domain: settings.base_domain.clone(),
        }
    }
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Every published record, in discovery order
    pub registry: Registry,
    /// What happened to each repository and page
    pub report: RunReport,
}

/// Drives the pipeline over one organization.
pub struct Generator<'a> {
    provider: &'a dyn RepoProvider,
    renderer: &'a dyn Renderer,
    sink: &'a mut dyn PageSink,
    options: GenerateOptions,
}

impl<'a> Generator<'a> {
    pub fn new(
        provider: &'a dyn RepoProvider,
        renderer: &'a dyn Renderer,
        sink: &'a mut dyn PageSink,
        options: GenerateOptions,
    ) -> Self {
        Self {
            provider,
            renderer,
            sink,
            options,
        }
    }

    /// Run the full pipeline.
    ///
    /// # Errors
    ///
    /// Only a failed repository listing is an error. Everything after that
    /// is recorded in the returned report.
    pub async fn run(&mut self) -> Result<RunOutput, GenerateError> {
        let org = self.options.org.clone();
        let repos = self
            .provider
            .list_repositories(&org)
            .await
            .map_err(|source| GenerateError::ListRepositories {
                org: org.clone(),
                source,
            })?;

        info!(
            org = %org,
            provider = self.provider.name(),
            count = repos.len(),
            "listed repositories"
        );

        let mut registry = Registry::new();
        let mut report = RunReport::default();

        for repo in repos {
            let name = repo.name.clone();
            let outcome = self.process_repository(repo).await;

            match &outcome {
                Outcome::Included { module, records } => {
                    info!(repo = %name, module = %module, records = records.len(), "included");
                    for record in records {
                        self.publish(record.clone(), &mut registry, &mut report);
                    }
                }
                Outcome::Skipped(reason) if reason.is_expected() => {
                    debug!(repo = %name, %reason, "skipped");
                }
                Outcome::Skipped(reason) => {
                    warn!(repo = %name, %reason, "skipped");
                }
            }

            report.repos.push(RepoOutcome {
                repo: name,
                outcome,
            });
        }

        self.publish_index(&registry, &mut report);

        Ok(RunOutput { registry, report })
    }

    /// Decide whether a repository is included and expand it.
    ///
    /// Performs provider calls but writes nothing.
    pub async fn process_repository(&self, mut repo: Repository) -> Outcome {
        if !qualifies(&repo) {
            return Outcome::Skipped(SkipReason::NotGo(repo.language.clone()));
        }

        let org = self.options.org.as_str();
        let bytes = match self
            .provider
            .get_file_content(org, &repo.name, MANIFEST_PATH)
            .await
        {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Outcome::Skipped(SkipReason::ManifestMissing),
            Err(e) => return Outcome::Skipped(SkipReason::ManifestFetch(e)),
        };

        let text = match decode_manifest(bytes) {
            Ok(text) => text,
            Err(e) => return Outcome::Skipped(SkipReason::ManifestDecode(e)),
        };

        let module = parse_module_name(&text);
        if module.is_empty() {
            return Outcome::Skipped(SkipReason::NoModuleDirective);
        }
        if !has_base_prefix(&module, &self.options.base_package) {
            return Outcome::Skipped(SkipReason::PrefixMismatch(module));
        }

        repo.file_entries = match self
            .provider
            .get_directory_listing(org, &repo.name, "")
            .await
        {
            Ok(entries) => entries,
            Err(e) => return Outcome::Skipped(SkipReason::ListingFailed(e)),
        };

        let records = expand(&module, &repo);
        Outcome::Included { module, records }
    }

    /// Write a record's page and insert it into the registry.
    ///
    /// Nothing is written when the registry already holds an identical
    /// record. A record whose page cannot be written stays out of the
    /// registry, so the index never links to a missing page.
    fn publish(
        &mut self,
        record: PackageRecord,
        registry: &mut Registry,
        report: &mut RunReport,
    ) {
        if registry.get(&record.import_path) == Some(&record) {
            return;
        }

        let page = self.renderer.render_import_page(&record);
        match self.sink.write_page(&record.import_path, &page) {
            Ok(path) => {
                debug!(import_path = %record.import_path, path = %path.display(), "wrote page");
                report.pages_written += 1;
                registry.insert(record);
            }
            Err(e) => {
                error!(import_path = %record.import_path, error = %e, "failed to write page");
                report.write_failures.push(WriteFailure {
                    import_path: Some(record.import_path),
                    message: e.to_string(),
                });
            }
        }
    }

    /// Render and write the index page.
    fn publish_index(&mut self, registry: &Registry, report: &mut RunReport) {
        let ctx = IndexContext::new(&self.options.base_domain, &self.options.org);
        let page = self.renderer.render_index_page(&ctx, registry.all());

        match self.sink.write_index(&page) {
            Ok(path) => {
                info!(path = %path.display(), packages = registry.len(), "wrote index");
                report.index_path = Some(path);
            }
            Err(e) => {
                error!(error = %e, "failed to write index page");
                report.write_failures.push(WriteFailure {
                    import_path: None,
                    message: e.to_string(),
                });
            }
        }
    }
}

//! mkrepo: provision organization GitHub repositories from language templates.
//!
//! A run creates the remote repository, uploads the chosen language template's
//! file tree, attaches the default team (best-effort), and applies branch
//! protection (best-effort). A failure while uploading deletes the
//! just-created repository, so a failed run never leaves a partial repository
//! behind.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::{FilesystemTemplateSource, HttpGitHubClient};
use app::Provisioner;

pub use domain::{
    AppError, ApplicationName, BranchProtectionPolicy, ProvisionOutcome, ProvisionerConfig,
    RepositorySettings, Warning,
};

/// Provision a repository using configuration from the environment.
///
/// Reads `GITHUB_TOKEN` and `GITHUB_ORG`; either missing is a fatal
/// configuration error raised before any remote call.
pub fn provision(name: &str, language: &str) -> Result<ProvisionOutcome, AppError> {
    provision_with(&ProvisionerConfig::from_env()?, name, language)
}

/// Provision a repository with an explicit configuration.
///
/// Every run owns its configuration and client; nothing is shared through
/// process globals, so independent runs can coexist in one process.
pub fn provision_with(
    config: &ProvisionerConfig,
    name: &str,
    language: &str,
) -> Result<ProvisionOutcome, AppError> {
    let remote = HttpGitHubClient::new(config)?;
    let templates =
        FilesystemTemplateSource::new(config.template_root.clone(), config.max_file_bytes);

    Provisioner::new(config, &remote, &templates).provision(name, language)
}

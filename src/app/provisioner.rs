//! Repository provisioning orchestrator.
//!
//! Drives the full workflow: validate → create → populate → team → branch
//! protection. Phases 1-2 are fatal on failure; a population failure deletes
//! the just-created repository so a failed run never leaves a partial
//! repository behind. Phases 3-4 are best-effort and degrade into warnings on
//! the outcome.

use crate::domain::{
    AppError, ApplicationName, BranchProtectionPolicy, ProvisionOutcome, ProvisionerConfig,
    RepositorySettings, Warning,
};
use crate::ports::{
    ContentEncoding, LanguageTemplate, RemoteRepositoryClient, RepositoryHandle, TemplateSource,
};

const DEFAULT_BRANCH: &str = "main";

pub struct Provisioner<'a, R: RemoteRepositoryClient, T: TemplateSource> {
    config: &'a ProvisionerConfig,
    remote: &'a R,
    templates: &'a T,
}

impl<'a, R: RemoteRepositoryClient, T: TemplateSource> Provisioner<'a, R, T> {
    pub fn new(config: &'a ProvisionerConfig, remote: &'a R, templates: &'a T) -> Self {
        Self { config, remote, templates }
    }

    /// Provision a repository for `name` from the `language` template.
    ///
    /// The language is validated before any remote call; an unsupported
    /// language never creates a remote resource.
    pub fn provision(&self, name: &str, language: &str) -> Result<ProvisionOutcome, AppError> {
        let app_name = ApplicationName::new(name)?;
        let template = self.templates.resolve(language)?;

        let settings = RepositorySettings::standard(app_name.raw(), &template.language);
        let repo = self.remote.create_repository(app_name.canonical(), &settings)?;

        let mut warnings = Vec::new();

        let files_uploaded = match self.populate(&repo, &template, &mut warnings) {
            Ok(count) => count,
            Err(cause) => return Err(self.rollback(&repo, cause)),
        };

        self.attach_default_team(&repo, &mut warnings);
        self.protect_default_branch(&repo, &mut warnings);

        Ok(ProvisionOutcome { repository: repo.name, url: repo.url, files_uploaded, warnings })
    }

    /// Upload every template file. An empty template is valid and uploads
    /// nothing.
    fn populate(
        &self,
        repo: &RepositoryHandle,
        template: &LanguageTemplate,
        warnings: &mut Vec<Warning>,
    ) -> Result<usize, AppError> {
        let files = self.templates.walk(template)?;

        for file in &files {
            if file.encoding == ContentEncoding::Latin1 {
                warnings.push(Warning::Latin1Fallback { path: file.relative_path.clone() });
            }
            let message = format!("Add default file: {}", file.file_name);
            self.remote.create_file(repo, &file.relative_path, &message, file.content.as_bytes())?;
        }

        Ok(files.len())
    }

    /// Compensate for a failed population: delete the repository, then report
    /// the original cause as a terminal provisioning failure.
    fn rollback(&self, repo: &RepositoryHandle, cause: AppError) -> AppError {
        let cleanup = match self.remote.delete_repository(repo) {
            Ok(()) => "Partial repository cleaned up.".to_string(),
            Err(delete_err) => format!(
                "Cleanup failed ({}); the repository may still exist.",
                delete_err
            ),
        };

        AppError::ProvisioningFailed {
            repository: repo.name.clone(),
            cause: cause.to_string(),
            cleanup,
        }
    }

    /// Attach the configured default team. Best-effort: a missing team or a
    /// remote failure becomes a warning.
    fn attach_default_team(&self, repo: &RepositoryHandle, warnings: &mut Vec<Warning>) {
        let team_name = &self.config.default_team;

        let teams = match self.remote.list_teams() {
            Ok(teams) => teams,
            Err(err) => {
                warnings.push(Warning::TeamAttachFailed {
                    team: team_name.clone(),
                    details: err.to_string(),
                });
                return;
            }
        };

        let Some(team) = teams.into_iter().find(|t| &t.name == team_name) else {
            warnings.push(Warning::TeamNotFound { team: team_name.clone() });
            return;
        };

        if let Err(err) = self.remote.attach_team(&team, repo) {
            warnings.push(Warning::TeamAttachFailed {
                team: team_name.clone(),
                details: err.to_string(),
            });
        }
    }

    /// Apply branch protection to `main`. Best-effort: this commonly fails on
    /// plans without protected branches, so any failure becomes a warning.
    fn protect_default_branch(&self, repo: &RepositoryHandle, warnings: &mut Vec<Warning>) {
        let result = self
            .remote
            .default_branch(repo, DEFAULT_BRANCH)
            .and_then(|branch| {
                self.remote.set_branch_protection(
                    repo,
                    &branch,
                    &BranchProtectionPolicy::default(),
                )
            });

        if let Err(err) = result {
            warnings.push(Warning::BranchProtectionSkipped { details: err.to_string() });
        }
    }
}

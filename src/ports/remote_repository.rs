//! Remote repository service port definition.

use crate::domain::{AppError, BranchProtectionPolicy, RepositorySettings};

/// Handle to a created remote repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryHandle {
    /// Canonical repository name within the organization.
    pub name: String,
    /// Browser URL of the repository.
    pub url: String,
}

/// An organization team, as listed by the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    /// Display name, matched against the configured default team.
    pub name: String,
    /// URL-safe identifier used to address the team in API calls.
    pub slug: String,
}

/// Handle to a repository branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
}

/// Port for organization/repository operations.
///
/// Every call blocks until the remote service answers; the provisioner issues
/// calls one at a time and performs no retries of its own.
pub trait RemoteRepositoryClient {
    /// Create a repository in the organization with the given settings.
    fn create_repository(
        &self,
        name: &str,
        settings: &RepositorySettings,
    ) -> Result<RepositoryHandle, AppError>;

    /// Create a file at `path` in the repository with a commit message.
    fn create_file(
        &self,
        repo: &RepositoryHandle,
        path: &str,
        message: &str,
        content: &[u8],
    ) -> Result<(), AppError>;

    /// List the organization's teams.
    fn list_teams(&self) -> Result<Vec<Team>, AppError>;

    /// Give a team access to the repository.
    fn attach_team(&self, team: &Team, repo: &RepositoryHandle) -> Result<(), AppError>;

    /// Fetch a branch of the repository.
    fn default_branch(&self, repo: &RepositoryHandle, branch: &str) -> Result<Branch, AppError>;

    /// Apply a protection policy to a branch.
    fn set_branch_protection(
        &self,
        repo: &RepositoryHandle,
        branch: &Branch,
        policy: &BranchProtectionPolicy,
    ) -> Result<(), AppError>;

    /// Delete the repository. Used only for rollback after a failed population.
    fn delete_repository(&self, repo: &RepositoryHandle) -> Result<(), AppError>;
}

//! Repository settings, branch protection policy, and run outcome types.

/// Fixed provisioning defaults applied to every repository this tool creates.
///
/// These are organization policy, not user-configurable: merge commits off,
/// squash merges on, issues on, wiki off.
#[derive(Debug, Clone)]
pub struct RepositorySettings {
    pub description: String,
    pub private: bool,
    pub has_issues: bool,
    pub has_wiki: bool,
    pub allow_merge_commit: bool,
    pub allow_squash_merge: bool,
}

impl RepositorySettings {
    /// Standard settings for an application repository.
    pub fn standard(app_name: &str, language: &str) -> Self {
        Self {
            description: format!("Repository for {} - {} application.", app_name, language),
            private: false,
            has_issues: true,
            has_wiki: false,
            allow_merge_commit: false,
            allow_squash_merge: true,
        }
    }
}

/// Desired protection settings for the default branch.
#[derive(Debug, Clone)]
pub struct BranchProtectionPolicy {
    pub required_approving_review_count: u32,
    pub dismiss_stale_reviews: bool,
    pub enforce_admins: bool,
    /// Require branches to be up to date before merging.
    pub strict: bool,
    pub require_code_owner_reviews: bool,
    pub allow_force_pushes: bool,
    pub allow_deletions: bool,
}

impl Default for BranchProtectionPolicy {
    fn default() -> Self {
        Self {
            required_approving_review_count: 1,
            dismiss_stale_reviews: true,
            enforce_admins: true,
            strict: true,
            require_code_owner_reviews: true,
            allow_force_pushes: false,
            allow_deletions: false,
        }
    }
}

/// Non-fatal degradation reported on a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The default team does not exist in the organization.
    TeamNotFound { team: String },
    /// The team exists but attaching it failed.
    TeamAttachFailed { team: String, details: String },
    /// Branch protection could not be applied (commonly a plan-tier limit).
    BranchProtectionSkipped { details: String },
    /// A template file was not valid UTF-8 and was decoded as Latin-1.
    Latin1Fallback { path: String },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::TeamNotFound { team } => write!(f, "Team '{}' not found", team),
            Warning::TeamAttachFailed { team, details } => {
                write!(f, "Failed to add team '{}': {}", team, details)
            }
            Warning::BranchProtectionSkipped { details } => {
                write!(f, "Skipping branch protection setup: {}", details)
            }
            Warning::Latin1Fallback { path } => {
                write!(f, "File '{}' is not UTF-8 encoded; used Latin-1 fallback", path)
            }
        }
    }
}

/// Result of a successful provisioning run.
#[derive(Debug, Clone)]
pub struct ProvisionOutcome {
    /// Canonical repository name.
    pub repository: String,
    /// Browser URL of the created repository.
    pub url: String,
    /// Number of template files uploaded.
    pub files_uploaded: usize,
    /// Best-effort phase degradations, in occurrence order.
    pub warnings: Vec<Warning>,
}

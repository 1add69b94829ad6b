use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::domain::AppError;

/// Default per-file upload ceiling: 5 MiB.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;

const DEFAULT_TEAM: &str = "Engineers";
const DEFAULT_TEMPLATE_ROOT: &str = "languages";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_api_url() -> Url {
    Url::parse("https://api.github.com").expect("default API URL is valid")
}

/// Configuration for a provisioning run.
///
/// Constructed once and passed in explicitly; nothing here lives in process
/// globals, so independent runs (and tests) can carry independent settings.
#[derive(Debug, Clone)]
pub struct ProvisionerConfig {
    /// API credential for the remote repository service.
    pub token: String,
    /// Organization in which repositories are created.
    pub organization: String,
    /// Remote service endpoint.
    pub api_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Root directory of the language templates.
    pub template_root: PathBuf,
    /// Team attached to every provisioned repository when present.
    pub default_team: String,
    /// Per-file upload ceiling in bytes.
    pub max_file_bytes: u64,
}

impl ProvisionerConfig {
    /// Build configuration from `GITHUB_TOKEN` and `GITHUB_ORG`.
    ///
    /// Fails before any remote call when either variable is absent.
    pub fn from_env() -> Result<Self, AppError> {
        let token = std::env::var("GITHUB_TOKEN")
            .map_err(|_| AppError::EnvironmentVariableMissing("GITHUB_TOKEN".into()))?;
        let organization = std::env::var("GITHUB_ORG")
            .map_err(|_| AppError::EnvironmentVariableMissing("GITHUB_ORG".into()))?;

        Ok(Self::new(token, organization))
    }

    /// Configuration with defaults for everything but the credential and org.
    pub fn new(token: String, organization: String) -> Self {
        Self {
            token,
            organization,
            api_url: default_api_url(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            template_root: PathBuf::from(DEFAULT_TEMPLATE_ROOT),
            default_team: DEFAULT_TEAM.to_string(),
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
        }
    }
}

//! GitHub REST API client implementation using reqwest.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, BranchProtectionPolicy, ProvisionerConfig, RepositorySettings};
use crate::ports::{Branch, RemoteRepositoryClient, RepositoryHandle, Team};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_USER_AGENT: &str = concat!("mkrepo/", env!("CARGO_PKG_VERSION"));
const DEFAULT_STATUS_MESSAGE: &str = "GitHub API request failed";

/// HTTP transport for the GitHub organization/repository API.
///
/// Each call performs a single blocking request; there is no retry layer.
#[derive(Clone)]
pub struct HttpGitHubClient {
    token: String,
    organization: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGitHubClient")
            .field("api_url", &self.api_url)
            .field("organization", &self.organization)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpGitHubClient {
    /// Create a client bound to the configured endpoint, credential, and org.
    pub fn new(config: &ProvisionerConfig) -> Result<Self, AppError> {
        let client = Client::builder().timeout(config.timeout).build().map_err(|e| {
            AppError::remote(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self {
            token: config.token.clone(),
            organization: config.organization.clone(),
            api_url: config.api_url.clone(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        self.api_url.join(path).map_err(|e| {
            AppError::remote(format!("Invalid API endpoint '{}': {}", path, e))
        })
    }

    fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, GITHUB_USER_AGENT)
    }

    /// Send a request and hand back the body of a successful response.
    fn send(&self, builder: RequestBuilder) -> Result<String, AppError> {
        let response = self.with_headers(builder).send().map_err(|e| {
            AppError::remote(format!("HTTP request failed: {}", e))
        })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            return Ok(body_text);
        }

        Err(AppError::RemoteService {
            message: extract_error_message(&body_text)
                .unwrap_or_else(|| default_message(status, &body_text)),
            status: Some(status.as_u16()),
        })
    }

    fn parse<T: serde::de::DeserializeOwned>(&self, body: &str, what: &str) -> Result<T, AppError> {
        serde_json::from_str(body).map_err(|e| {
            AppError::remote(format!("Failed to parse {} response: {}", what, e))
        })
    }
}

#[derive(Debug, Serialize)]
struct CreateRepoRequest<'a> {
    name: &'a str,
    description: &'a str,
    private: bool,
    has_issues: bool,
    has_wiki: bool,
    allow_merge_commit: bool,
    allow_squash_merge: bool,
}

#[derive(Debug, Deserialize)]
struct RepoResponse {
    name: String,
    html_url: String,
}

#[derive(Debug, Serialize)]
struct CreateFileRequest<'a> {
    message: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct TeamResponse {
    name: String,
    slug: String,
}

#[derive(Debug, Deserialize)]
struct BranchResponse {
    name: String,
}

#[derive(Debug, Serialize)]
struct ProtectionRequest {
    required_status_checks: RequiredStatusChecks,
    enforce_admins: bool,
    required_pull_request_reviews: RequiredReviews,
    restrictions: Option<()>,
    allow_force_pushes: bool,
    allow_deletions: bool,
}

#[derive(Debug, Serialize)]
struct RequiredStatusChecks {
    strict: bool,
    contexts: Vec<String>,
}

#[derive(Debug, Serialize)]
struct RequiredReviews {
    dismiss_stale_reviews: bool,
    require_code_owner_reviews: bool,
    required_approving_review_count: u32,
}

impl RemoteRepositoryClient for HttpGitHubClient {
    fn create_repository(
        &self,
        name: &str,
        settings: &RepositorySettings,
    ) -> Result<RepositoryHandle, AppError> {
        let url = self.endpoint(&format!("orgs/{}/repos", self.organization))?;
        let request = CreateRepoRequest {
            name,
            description: &settings.description,
            private: settings.private,
            has_issues: settings.has_issues,
            has_wiki: settings.has_wiki,
            allow_merge_commit: settings.allow_merge_commit,
            allow_squash_merge: settings.allow_squash_merge,
        };

        let body = self.send(self.client.post(url).json(&request))?;
        let repo: RepoResponse = self.parse(&body, "repository")?;
        Ok(RepositoryHandle { name: repo.name, url: repo.html_url })
    }

    fn create_file(
        &self,
        repo: &RepositoryHandle,
        path: &str,
        message: &str,
        content: &[u8],
    ) -> Result<(), AppError> {
        let url = self.endpoint(&format!(
            "repos/{}/{}/contents/{}",
            self.organization, repo.name, path
        ))?;
        let request = CreateFileRequest { message, content: BASE64.encode(content) };

        self.send(self.client.put(url).json(&request))?;
        Ok(())
    }

    fn list_teams(&self) -> Result<Vec<Team>, AppError> {
        let url = self.endpoint(&format!("orgs/{}/teams", self.organization))?;
        let body = self.send(self.client.get(url))?;
        let teams: Vec<TeamResponse> = self.parse(&body, "teams")?;
        Ok(teams.into_iter().map(|t| Team { name: t.name, slug: t.slug }).collect())
    }

    fn attach_team(&self, team: &Team, repo: &RepositoryHandle) -> Result<(), AppError> {
        let url = self.endpoint(&format!(
            "orgs/{org}/teams/{slug}/repos/{org}/{repo}",
            org = self.organization,
            slug = team.slug,
            repo = repo.name
        ))?;

        self.send(self.client.put(url))?;
        Ok(())
    }

    fn default_branch(&self, repo: &RepositoryHandle, branch: &str) -> Result<Branch, AppError> {
        let url = self.endpoint(&format!(
            "repos/{}/{}/branches/{}",
            self.organization, repo.name, branch
        ))?;
        let body = self.send(self.client.get(url))?;
        let branch: BranchResponse = self.parse(&body, "branch")?;
        Ok(Branch { name: branch.name })
    }

    fn set_branch_protection(
        &self,
        repo: &RepositoryHandle,
        branch: &Branch,
        policy: &BranchProtectionPolicy,
    ) -> Result<(), AppError> {
        let url = self.endpoint(&format!(
            "repos/{}/{}/branches/{}/protection",
            self.organization, repo.name, branch.name
        ))?;
        let request = ProtectionRequest {
            required_status_checks: RequiredStatusChecks {
                strict: policy.strict,
                contexts: Vec::new(),
            },
            enforce_admins: policy.enforce_admins,
            required_pull_request_reviews: RequiredReviews {
                dismiss_stale_reviews: policy.dismiss_stale_reviews,
                require_code_owner_reviews: policy.require_code_owner_reviews,
                required_approving_review_count: policy.required_approving_review_count,
            },
            restrictions: None,
            allow_force_pushes: policy.allow_force_pushes,
            allow_deletions: policy.allow_deletions,
        };

        self.send(self.client.put(url).json(&request))?;
        Ok(())
    }

    fn delete_repository(&self, repo: &RepositoryHandle) -> Result<(), AppError> {
        let url = self.endpoint(&format!("repos/{}/{}", self.organization, repo.name))?;
        self.send(self.client.delete(url))?;
        Ok(())
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;
    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

fn default_message(status: StatusCode, body: &str) -> String {
    if !body.trim().is_empty() {
        body.trim().to_string()
    } else if status == StatusCode::UNPROCESSABLE_ENTITY {
        "Validation failed".to_string()
    } else if status.is_server_error() {
        "Server error".to_string()
    } else {
        DEFAULT_STATUS_MESSAGE.to_string()
    }
}

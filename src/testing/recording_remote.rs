//! In-memory remote repository client for orchestrator tests.

use std::cell::{Cell, RefCell};

use crate::domain::{AppError, BranchProtectionPolicy, RepositorySettings};
use crate::ports::{Branch, RemoteRepositoryClient, RepositoryHandle, Team};

/// Call sites where a failure can be injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Create,
    /// Fail the upload of the file at this zero-based position.
    Upload { index: usize },
    ListTeams,
    AttachTeam,
    Branch,
    Protection,
    Delete,
}

struct UploadedFile {
    path: String,
    message: String,
    content: Vec<u8>,
}

/// Records every call and stores uploaded files; failures are injected per
/// call site via [`FailOn`].
#[derive(Default)]
pub struct RecordingRemote {
    failures: Vec<FailOn>,
    teams: Option<Vec<Team>>,
    calls: RefCell<Vec<String>>,
    files: RefCell<Vec<UploadedFile>>,
    deleted: Cell<bool>,
    team_attached: Cell<bool>,
}

impl RecordingRemote {
    /// Add a failure injection point. Chainable.
    pub fn failing(mut self, site: FailOn) -> Self {
        self.failures.push(site);
        self
    }

    /// Make the organization have no teams at all.
    pub fn without_teams(mut self) -> Self {
        self.teams = Some(Vec::new());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn uploaded_paths(&self) -> Vec<String> {
        self.files.borrow().iter().map(|f| f.path.clone()).collect()
    }

    pub fn uploaded_content(&self, path: &str) -> Option<Vec<u8>> {
        self.files.borrow().iter().find(|f| f.path == path).map(|f| f.content.clone())
    }

    pub fn commit_message(&self, path: &str) -> Option<String> {
        self.files.borrow().iter().find(|f| f.path == path).map(|f| f.message.clone())
    }

    pub fn deleted(&self) -> bool {
        self.deleted.get()
    }

    pub fn team_attached(&self) -> bool {
        self.team_attached.get()
    }

    fn record(&self, call: &str) {
        self.calls.borrow_mut().push(call.to_string());
    }

    fn fails_at(&self, site: FailOn) -> bool {
        self.failures.contains(&site)
    }

    fn injected(&self, call: &str) -> AppError {
        AppError::RemoteService {
            message: format!("injected {} failure", call),
            status: Some(500),
        }
    }
}

impl RemoteRepositoryClient for RecordingRemote {
    fn create_repository(
        &self,
        name: &str,
        _settings: &RepositorySettings,
    ) -> Result<RepositoryHandle, AppError> {
        self.record("create_repository");
        if self.fails_at(FailOn::Create) {
            return Err(self.injected("create_repository"));
        }
        Ok(RepositoryHandle {
            name: name.to_string(),
            url: format!("https://github.example/acme/{}", name),
        })
    }

    fn create_file(
        &self,
        _repo: &RepositoryHandle,
        path: &str,
        message: &str,
        content: &[u8],
    ) -> Result<(), AppError> {
        self.record("create_file");
        let index = self.files.borrow().len();
        if self.fails_at(FailOn::Upload { index }) {
            return Err(self.injected("create_file"));
        }
        self.files.borrow_mut().push(UploadedFile {
            path: path.to_string(),
            message: message.to_string(),
            content: content.to_vec(),
        });
        Ok(())
    }

    fn list_teams(&self) -> Result<Vec<Team>, AppError> {
        self.record("list_teams");
        if self.fails_at(FailOn::ListTeams) {
            return Err(self.injected("list_teams"));
        }
        Ok(self.teams.clone().unwrap_or_else(|| {
            vec![Team { name: "Engineers".into(), slug: "engineers".into() }]
        }))
    }

    fn attach_team(&self, _team: &Team, _repo: &RepositoryHandle) -> Result<(), AppError> {
        self.record("attach_team");
        if self.fails_at(FailOn::AttachTeam) {
            return Err(self.injected("attach_team"));
        }
        self.team_attached.set(true);
        Ok(())
    }

    fn default_branch(&self, _repo: &RepositoryHandle, branch: &str) -> Result<Branch, AppError> {
        self.record("default_branch");
        if self.fails_at(FailOn::Branch) {
            return Err(self.injected("default_branch"));
        }
        Ok(Branch { name: branch.to_string() })
    }

    fn set_branch_protection(
        &self,
        _repo: &RepositoryHandle,
        _branch: &Branch,
        _policy: &BranchProtectionPolicy,
    ) -> Result<(), AppError> {
        self.record("set_branch_protection");
        if self.fails_at(FailOn::Protection) {
            return Err(self.injected("set_branch_protection"));
        }
        Ok(())
    }

    fn delete_repository(&self, _repo: &RepositoryHandle) -> Result<(), AppError> {
        self.record("delete_repository");
        if self.fails_at(FailOn::Delete) {
            return Err(self.injected("delete_repository"));
        }
        self.deleted.set(true);
        Ok(())
    }
}

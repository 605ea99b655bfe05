//! In-memory [`RepositoryClient`] for lane and auditor tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use github_client::{
    Error, FileCreateRequest, FileCreateResponse, HookCreatePayload, HookKind, Label,
    LabelCreatePayload, Repository, RepositoryClient, RepositoryHook, RepositoryOwner,
};

/// A request received by [`FakeClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    ListRepositories(String),
    ListHooks(String),
    CreateHook(String),
    ListLabels(String),
    CreateLabel(String),
    GetFile(String, String),
    CreateFile(String, String),
}

impl Call {
    pub(crate) fn is_write(&self) -> bool {
        matches!(
            self,
            Call::CreateHook(_) | Call::CreateLabel(_) | Call::CreateFile(_, _)
        )
    }
}

#[derive(Default)]
struct FakeState {
    repositories: HashMap<String, Vec<Repository>>,
    hooks: HashMap<String, Vec<RepositoryHook>>,
    labels: HashMap<String, Vec<Label>>,
    files: HashSet<(String, String)>,
    failing_orgs: HashSet<String>,
    failing_hook_lists: HashSet<String>,
    failing_file_checks: HashSet<String>,
    reject_writes: bool,
    file_response: Option<(u16, String)>,
    next_id: u64,
    calls: Vec<Call>,
    created_hooks: Vec<(String, HookCreatePayload)>,
    created_labels: Vec<(String, LabelCreatePayload)>,
    created_files: Vec<(String, FileCreateRequest)>,
}

/// Repositories keyed by organization, everything else keyed by repository name.
#[derive(Default)]
pub(crate) struct FakeClient {
    state: Mutex<FakeState>,
}

pub(crate) fn repository(org: &str, name: &str) -> Repository {
    Repository {
        name: name.to_string(),
        full_name: format!("{org}/{name}"),
        owner: RepositoryOwner {
            login: org.to_string(),
        },
        contents_url: Some(format!(
            "https://api.github.com/repos/{org}/{name}/contents/{{+path}}"
        )),
    }
}

pub(crate) fn web_hook(id: u64, url: &str) -> RepositoryHook {
    RepositoryHook {
        id,
        name: "web".to_string(),
        kind: HookKind::Generic,
        url: Some(url.to_string()),
        events: vec!["push".to_string()],
        active: true,
    }
}

pub(crate) fn service_hook(id: u64, name: &str) -> RepositoryHook {
    RepositoryHook {
        id,
        name: name.to_string(),
        kind: HookKind::Service,
        url: None,
        events: vec!["push".to_string()],
        active: true,
    }
}

impl FakeClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn with_state(self, f: impl FnOnce(&mut FakeState)) -> Self {
        f(&mut self.state.lock().unwrap());
        self
    }

    pub(crate) fn with_repository(self, org: &str, name: &str) -> Self {
        self.with_state(|s| {
            s.repositories
                .entry(org.to_string())
                .or_default()
                .push(repository(org, name))
        })
    }

    pub(crate) fn with_hook(self, repo: &str, hook: RepositoryHook) -> Self {
        self.with_state(|s| s.hooks.entry(repo.to_string()).or_default().push(hook))
    }

    pub(crate) fn with_label(self, repo: &str, name: &str, color: &str) -> Self {
        self.with_state(|s| {
            s.labels.entry(repo.to_string()).or_default().push(Label {
                name: name.to_string(),
                color: color.to_string(),
            })
        })
    }

    pub(crate) fn with_file(self, repo: &str, path: &str) -> Self {
        self.with_state(|s| {
            s.files.insert((repo.to_string(), path.to_string()));
        })
    }

    pub(crate) fn failing_org(self, org: &str) -> Self {
        self.with_state(|s| {
            s.failing_orgs.insert(org.to_string());
        })
    }

    pub(crate) fn failing_hook_list(self, repo: &str) -> Self {
        self.with_state(|s| {
            s.failing_hook_lists.insert(repo.to_string());
        })
    }

    pub(crate) fn failing_file_check(self, repo: &str) -> Self {
        self.with_state(|s| {
            s.failing_file_checks.insert(repo.to_string());
        })
    }

    pub(crate) fn rejecting_writes(self) -> Self {
        self.with_state(|s| s.reject_writes = true)
    }

    pub(crate) fn with_file_response(self, status: u16, body: &str) -> Self {
        self.with_state(|s| s.file_response = Some((status, body.to_string())))
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub(crate) fn writes(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_write).collect()
    }

    pub(crate) fn created_hooks(&self) -> Vec<(String, HookCreatePayload)> {
        self.state.lock().unwrap().created_hooks.clone()
    }

    pub(crate) fn created_labels(&self) -> Vec<(String, LabelCreatePayload)> {
        self.state.lock().unwrap().created_labels.clone()
    }

    pub(crate) fn created_files(&self) -> Vec<(String, FileCreateRequest)> {
        self.state.lock().unwrap().created_files.clone()
    }

    fn record(&self, call: Call) {
        self.state.lock().unwrap().calls.push(call);
    }
}

#[async_trait]
impl RepositoryClient for FakeClient {
    async fn list_org_repositories(&self, org: &str) -> Result<Vec<Repository>, Error> {
        self.record(Call::ListRepositories(org.to_string()));
        let state = self.state.lock().unwrap();
        if state.failing_orgs.contains(org) {
            return Err(Error::NotFound);
        }
        Ok(state.repositories.get(org).cloned().unwrap_or_default())
    }

    async fn list_hooks(&self, _owner: &str, repo: &str) -> Result<Vec<RepositoryHook>, Error> {
        self.record(Call::ListHooks(repo.to_string()));
        let state = self.state.lock().unwrap();
        if state.failing_hook_lists.contains(repo) {
            return Err(Error::RateLimitExceeded);
        }
        Ok(state.hooks.get(repo).cloned().unwrap_or_default())
    }

    async fn create_hook(
        &self,
        _owner: &str,
        repo: &str,
        payload: &HookCreatePayload,
    ) -> Result<RepositoryHook, Error> {
        self.record(Call::CreateHook(repo.to_string()));
        let mut state = self.state.lock().unwrap();
        if state.reject_writes {
            return Err(Error::InvalidResponse);
        }
        state.next_id += 1;
        state
            .created_hooks
            .push((repo.to_string(), payload.clone()));
        Ok(RepositoryHook {
            id: state.next_id,
            name: payload.name.clone(),
            kind: HookKind::from_name(&payload.name),
            url: None,
            events: payload.events.clone(),
            active: payload.active,
        })
    }

    async fn list_labels(&self, _owner: &str, repo: &str) -> Result<Vec<Label>, Error> {
        self.record(Call::ListLabels(repo.to_string()));
        let state = self.state.lock().unwrap();
        Ok(state.labels.get(repo).cloned().unwrap_or_default())
    }

    async fn create_label(
        &self,
        _owner: &str,
        repo: &str,
        payload: &LabelCreatePayload,
    ) -> Result<Label, Error> {
        self.record(Call::CreateLabel(repo.to_string()));
        let mut state = self.state.lock().unwrap();
        if state.reject_writes {
            return Err(Error::InvalidResponse);
        }
        state
            .created_labels
            .push((repo.to_string(), payload.clone()));
        Ok(Label {
            name: payload.name.clone(),
            color: payload.color.clone(),
        })
    }

    async fn get_file(&self, _owner: &str, repo: &str, path: &str) -> Result<(), Error> {
        self.record(Call::GetFile(repo.to_string(), path.to_string()));
        let state = self.state.lock().unwrap();
        if state.failing_file_checks.contains(repo) {
            return Err(Error::Transport("connection reset".to_string()));
        }
        if state.files.contains(&(repo.to_string(), path.to_string())) {
            Ok(())
        } else {
            Err(Error::NotFound)
        }
    }

    async fn create_file(
        &self,
        repository: &Repository,
        request: &FileCreateRequest,
    ) -> Result<FileCreateResponse, Error> {
        self.record(Call::CreateFile(
            repository.name.clone(),
            request.path.clone(),
        ));
        let mut state = self.state.lock().unwrap();
        if state.reject_writes {
            return Err(Error::Transport("connection reset".to_string()));
        }
        state
            .created_files
            .push((repository.name.clone(), request.clone()));
        let (status, body) = state
            .file_response
            .clone()
            .unwrap_or_else(|| (201, "{}".to_string()));
        Ok(FileCreateResponse { status, body })
    }
}

//! In-memory project registry implementing the host capabilities

use crate::core::{ItemKind, JobSummary, PollingResult, Project, ProjectDirectory};
use tracing::debug;

/// A project whose facts are fixed at construction
#[derive(Debug, Clone)]
pub struct StaticProject {
    full_name: String,
    display_name: String,
    buildable: bool,
    readable: bool,
    scm: Option<PollingResult>,
    last_build: Option<u64>,
}

impl StaticProject {
    /// Enabled, readable, no SCM, never built
    pub fn new(full_name: impl Into<String>) -> Self {
        let full_name = full_name.into();
        let display_name = full_name
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();
        Self {
            full_name,
            display_name,
            buildable: true,
            readable: true,
            scm: None,
            last_build: None,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Attach an SCM that reports `result` on every poll
    pub fn with_scm(mut self, result: PollingResult) -> Self {
        self.scm = Some(result);
        self
    }

    pub fn with_last_build(mut self, number: u64) -> Self {
        self.last_build = Some(number);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.buildable = false;
        self
    }

    pub fn unreadable(mut self) -> Self {
        self.readable = false;
        self
    }

    pub fn last_build(&self) -> Option<u64> {
        self.last_build
    }
}

impl Project for StaticProject {
    fn full_name(&self) -> &str {
        &self.full_name
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn url(&self) -> String {
        let path: Vec<&str> = self.full_name.split('/').collect();
        format!("job/{}/", path.join("/job/"))
    }

    fn is_buildable(&self) -> bool {
        self.buildable
    }

    fn has_scm(&self) -> bool {
        self.scm.is_some()
    }

    fn poll(&self) -> PollingResult {
        debug!("Polling {}", self.full_name);
        self.scm.unwrap_or(PollingResult::NoChanges)
    }

    fn has_ever_built(&self) -> bool {
        self.last_build.is_some()
    }
}

/// Host registry keyed by full name, insertion ordered
#[derive(Debug, Clone, Default)]
pub struct Registry {
    projects: Vec<StaticProject>,
    items: Vec<(String, String)>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a project
    pub fn add_project(&mut self, project: StaticProject) {
        match self
            .projects
            .iter_mut()
            .find(|p| p.full_name == project.full_name)
        {
            Some(existing) => *existing = project,
            None => self.projects.push(project),
        }
    }

    /// Add a non-project item such as a folder
    pub fn add_item(&mut self, full_name: impl Into<String>, kind: impl Into<String>) {
        self.items.push((full_name.into(), kind.into()));
    }

    pub fn project(&self, full_name: &str) -> Option<&StaticProject> {
        self.projects.iter().find(|p| p.full_name == full_name)
    }
}

impl ProjectDirectory for Registry {
    fn resolve(&self, full_name: &str) -> Option<&dyn Project> {
        self.project(full_name).map(|p| p as &dyn Project)
    }

    fn item_kind(&self, full_name: &str) -> Option<ItemKind> {
        if self.project(full_name).is_some() {
            return Some(ItemKind::Project);
        }
        self.items
            .iter()
            .find(|(name, _)| name == full_name)
            .map(|(_, kind)| ItemKind::Other(kind.clone()))
    }

    fn jobs(&self) -> Vec<JobSummary> {
        self.projects
            .iter()
            .map(|p| JobSummary {
                full_name: p.full_name.clone(),
                readable: p.readable,
            })
            .collect()
    }
}

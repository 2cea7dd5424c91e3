//! Host capability traits for project lookup and polling

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of polling a project's source-control system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PollingResult {
    /// Nothing changed since the last recorded state
    NoChanges,
    /// Changes were found that are worth a build
    Significant,
    /// The SCM demands a build regardless of the change set
    BuildNow,
}

impl PollingResult {
    /// Whether this result reports any change at all
    pub fn has_changes(&self) -> bool {
        !matches!(self, PollingResult::NoChanges)
    }
}

/// Access level a caller holds on the item that owns the condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    None,
    Read,
    Configure,
}

/// Classification of a named item in the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// A buildable project
    Project,
    /// Anything else (folders, views, pipelines the condition cannot poll)
    Other(String),
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Project => write!(f, "project"),
            ItemKind::Other(kind) => write!(f, "{}", kind),
        }
    }
}

/// A job as listed for autocompletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSummary {
    pub full_name: String,
    /// Whether the requesting caller may read this job
    pub readable: bool,
}

/// Read-only view of a configured project
///
/// The condition only ever reads these facts. `poll` may block on the
/// host's round-trip to the source-control system.
pub trait Project: Send + Sync {
    /// Full path name, e.g. `folder/projectA`
    fn full_name(&self) -> &str;

    /// Human-readable name shown in logs
    fn display_name(&self) -> &str;

    /// URL relative to the host root, e.g. `job/projectA/`
    fn url(&self) -> String;

    /// False when the project is administratively disabled
    fn is_buildable(&self) -> bool;

    /// Whether a source-control descriptor is attached
    fn has_scm(&self) -> bool;

    /// Query the current polling status
    fn poll(&self) -> PollingResult;

    /// Whether the project has at least one recorded build
    fn has_ever_built(&self) -> bool;
}

/// Lookup capability the host injects into the condition
pub trait ProjectDirectory: Send + Sync {
    /// Find a project by its full name
    fn resolve(&self, full_name: &str) -> Option<&dyn Project>;

    /// Classify any item by name, projects included
    fn item_kind(&self, full_name: &str) -> Option<ItemKind>;

    /// All jobs visible to the host, in display order
    fn jobs(&self) -> Vec<JobSummary>;
}

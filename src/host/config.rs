//! Registry configuration from YAML

use crate::core::PollingResult;
use crate::host::registry::{Registry, StaticProject};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Top-level registry file describing the host's items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Buildable projects
    #[serde(default)]
    pub projects: Vec<ProjectConfig>,

    /// Non-project items (folders, views)
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

/// Project entry as defined in YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Full path name, e.g. `team/projectA`
    pub name: String,

    /// Display name (defaults to the last path segment)
    #[serde(default)]
    pub display_name: Option<String>,

    /// False for disabled projects
    #[serde(default = "default_true")]
    pub buildable: bool,

    /// Whether the caller may read this project
    #[serde(default = "default_true")]
    pub readable: bool,

    /// Polling result the attached SCM reports
    #[serde(default)]
    pub scm: ScmConfig,

    /// Number of the last completed build
    #[serde(default)]
    pub last_build: Option<u64>,
}

/// SCM attached to a project, `none` when there is none
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScmConfig {
    #[default]
    None,
    NoChanges,
    Significant,
    BuildNow,
}

impl ScmConfig {
    fn polling_result(self) -> Option<PollingResult> {
        match self {
            ScmConfig::None => None,
            ScmConfig::NoChanges => Some(PollingResult::NoChanges),
            ScmConfig::Significant => Some(PollingResult::Significant),
            ScmConfig::BuildNow => Some(PollingResult::BuildNow),
        }
    }
}

/// Non-project item entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemConfig {
    pub name: String,
    pub kind: String,
}

fn default_true() -> bool {
    true
}

impl RegistryConfig {
    /// Load registry configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse registry configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: RegistryConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the registry configuration
    pub fn validate(&self) -> Result<()> {
        let names = self
            .projects
            .iter()
            .map(|p| &p.name)
            .chain(self.items.iter().map(|i| &i.name));

        let mut seen = HashSet::new();
        for name in names {
            if name.trim().is_empty() {
                anyhow::bail!("Registry entry with empty name");
            }
            if !seen.insert(name) {
                anyhow::bail!("Duplicate item name: {}", name);
            }
        }

        Ok(())
    }

    /// Build the in-memory registry
    pub fn to_registry(&self) -> Registry {
        let mut registry = Registry::new();

        for p in &self.projects {
            let mut project = StaticProject::new(&p.name);
            if let Some(display_name) = &p.display_name {
                project = project.with_display_name(display_name);
            }
            if let Some(result) = p.scm.polling_result() {
                project = project.with_scm(result);
            }
            if let Some(number) = p.last_build {
                project = project.with_last_build(number);
            }
            if !p.buildable {
                project = project.disabled();
            }
            if !p.readable {
                project = project.unreadable();
            }
            registry.add_project(project);
        }

        for item in &self.items {
            registry.add_item(&item.name, &item.kind);
        }

        registry
    }
}

//! pollscm-condition - run condition that gates a build step on another
//! project's SCM changes

pub mod cli;
pub mod core;
pub mod host;

// Re-export commonly used types
pub use crate::core::{
    BuildLog, EvaluationContext, FormValidation, PollScmCondition, PollingResult, Project,
    ProjectDirectory, RunCondition,
};
pub use crate::host::{Registry, RegistryConfig, StaticProject};

//! Poll-SCM run condition
//!
//! Decides whether a dependent build step should run, based on whether
//! another project has pending source-control changes or has never built.

use crate::core::context::EvaluationContext;
use crate::core::expand::{Expander, MacroExpander};
use crate::core::project::{PollingResult, Project, ProjectDirectory};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Display name shown wherever the host lists available conditions
pub const DISPLAY_NAME: &str = "Poll SCM of another project";

/// A condition the host consults around a build step
pub trait RunCondition {
    /// Name shown in the host's condition picker
    fn display_name(&self) -> &'static str;

    /// Checked before the build starts
    fn prebuild(&self, _ctx: &mut EvaluationContext<'_>, _directory: &dyn ProjectDirectory) -> bool {
        true
    }

    /// Checked when the guarded step is about to run
    fn run_perform(&self, ctx: &mut EvaluationContext<'_>, directory: &dyn ProjectDirectory) -> bool;
}

/// Condition that is true when the target project has SCM changes
/// or has never been built
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollScmCondition {
    /// Target project name, may contain `${VAR}` references
    project: String,
}

impl PollScmCondition {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
        }
    }

    /// The configured target pattern
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Evaluate using the default macro expander
    pub fn evaluate(&self, ctx: &mut EvaluationContext<'_>, directory: &dyn ProjectDirectory) -> bool {
        self.evaluate_with(&MacroExpander, ctx, directory)
    }

    /// Evaluate with a host-supplied expander
    pub fn evaluate_with(
        &self,
        expander: &dyn Expander,
        ctx: &mut EvaluationContext<'_>,
        directory: &dyn ProjectDirectory,
    ) -> bool {
        let name = match expander.expand(&self.project, ctx.env) {
            Ok(name) => name,
            Err(e) => {
                debug!("Expansion of '{}' failed: {}", self.project, e);
                ctx.log(format!(
                    "Project variable expansion failed for {} (false)",
                    self.project
                ));
                ctx.log(e.to_string());
                return false;
            }
        };

        let project = match lookup(directory, &name) {
            Some(project) => project,
            None => {
                ctx.log(format!("No project with name {} (false)", name));
                return false;
            }
        };

        let link = hyperlink(project);

        if !project.is_buildable() {
            ctx.log(format!("Project {} is disabled. (false)", link));
            return false;
        }

        if !project.has_scm() {
            ctx.log(format!("Project {} does not have a SCM configured. (false)", link));
            return false;
        }

        let status = project.poll();
        debug!("Polled {}: {:?}", project.full_name(), status);

        match status {
            PollingResult::Significant | PollingResult::BuildNow => {
                info!("Project {} has SCM changes", project.full_name());
                ctx.log(format!("Project {} has changes. (true)", link));
                true
            }
            PollingResult::NoChanges if !project.has_ever_built() => {
                info!("Project {} has never built", project.full_name());
                ctx.log(format!("Project {} has no current builds. (true)", link));
                true
            }
            PollingResult::NoChanges => false,
        }
    }
}

impl RunCondition for PollScmCondition {
    fn display_name(&self) -> &'static str {
        DISPLAY_NAME
    }

    fn run_perform(&self, ctx: &mut EvaluationContext<'_>, directory: &dyn ProjectDirectory) -> bool {
        self.evaluate(ctx, directory)
    }
}

fn lookup<'d>(directory: &'d dyn ProjectDirectory, name: &str) -> Option<&'d dyn Project> {
    if name.is_empty() {
        return None;
    }
    directory.resolve(name)
}

/// Plain-text rendering of a link to the project page
fn hyperlink(project: &dyn Project) -> String {
    format!("{} (/{})", project.display_name(), project.url())
}

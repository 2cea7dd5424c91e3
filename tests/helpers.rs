//! Test utility functions for pollscm-condition

use pollscm_condition::core::{EvaluationContext, PollScmCondition, PollingResult};
use pollscm_condition::host::{Registry, StaticProject};
use std::collections::HashMap;

/// Outcome of one evaluation: the verdict plus everything logged
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    pub verdict: bool,
    pub log: Vec<String>,
}

impl EvaluationResult {
    /// The build log joined into one string
    pub fn log_text(&self) -> String {
        self.log.join("\n")
    }
}

/// Evaluate `pattern` against `registry` with the given build environment
pub fn evaluate(registry: &Registry, pattern: &str, env: &[(&str, &str)]) -> EvaluationResult {
    let condition = PollScmCondition::new(pattern);
    evaluate_condition(registry, &condition, env)
}

/// Evaluate an existing condition
pub fn evaluate_condition(
    registry: &Registry,
    condition: &PollScmCondition,
    env: &[(&str, &str)],
) -> EvaluationResult {
    let env: HashMap<String, String> = env
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let mut log: Vec<String> = Vec::new();
    let verdict = {
        let mut ctx = EvaluationContext::new(&env, &mut log);
        condition.evaluate(&mut ctx, registry)
    };

    EvaluationResult { verdict, log }
}

/// Registry holding the given projects plus the project running the build
pub fn registry_with(projects: Vec<StaticProject>) -> Registry {
    let mut registry = Registry::new();
    registry.add_project(StaticProject::new("thisProject").with_last_build(1));
    for project in projects {
        registry.add_project(project);
    }
    registry
}

/// `projectA` with an SCM reporting `result`
pub fn project_a(result: PollingResult) -> StaticProject {
    StaticProject::new("projectA").with_scm(result)
}

/// Assert the verdict and show the log on failure
pub fn assert_verdict(result: &EvaluationResult, expected: bool) {
    assert_eq!(
        result.verdict, expected,
        "Expected verdict {}, build log was:\n{}",
        expected,
        result.log_text()
    );
}

/// Assert some log line contains `fragment`
pub fn assert_logged(result: &EvaluationResult, fragment: &str) {
    assert!(
        result.log.iter().any(|line| line.contains(fragment)),
        "Build log:\n{}\n\ndoes not contain:\n{}",
        result.log_text(),
        fragment
    );
}

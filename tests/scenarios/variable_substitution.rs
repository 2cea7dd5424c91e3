//! Test: Variable Substitution in the target pattern
//!
//! The pattern is expanded against the triggering build's environment
//! before lookup. Malformed references fail closed.

use crate::helpers::*;
use pollscm_condition::core::PollingResult;
use pollscm_condition::host::StaticProject;

#[test]
fn test_braced_reference() {
    let registry = registry_with(vec![project_a(PollingResult::BuildNow)]);

    let result = evaluate(&registry, "${TARGET}", &[("TARGET", "projectA")]);

    assert_verdict(&result, true);
}

#[test]
fn test_bare_reference_inside_path() {
    let registry = registry_with(vec![
        StaticProject::new("team/projectA").with_scm(PollingResult::Significant),
    ]);

    let result = evaluate(
        &registry,
        "$FOLDER/${TARGET}",
        &[("FOLDER", "team"), ("TARGET", "projectA")],
    );

    assert_verdict(&result, true);
}

#[test]
fn test_unset_variable_does_not_resolve() {
    let registry = registry_with(vec![project_a(PollingResult::BuildNow)]);

    let result = evaluate(&registry, "${TARGET}", &[]);

    assert_verdict(&result, false);
    assert_logged(&result, "No project with name ${TARGET} (false)");
}

#[test]
fn test_variable_expanding_to_empty() {
    let registry = registry_with(vec![project_a(PollingResult::BuildNow)]);

    let result = evaluate(&registry, "${TARGET}", &[("TARGET", "")]);

    assert_verdict(&result, false);
}

#[test]
fn test_unterminated_reference() {
    let registry = registry_with(vec![project_a(PollingResult::BuildNow)]);

    let result = evaluate(&registry, "${TARGET", &[("TARGET", "projectA")]);

    assert_verdict(&result, false);
    assert_eq!(
        result.log[0],
        "Project variable expansion failed for ${TARGET (false)"
    );
    assert_logged(&result, "unterminated variable reference at offset 0");
}

#[test]
fn test_invalid_variable_name() {
    let registry = registry_with(vec![project_a(PollingResult::BuildNow)]);

    let result = evaluate(&registry, "${1TARGET}", &[]);

    assert_verdict(&result, false);
    assert_logged(&result, "Project variable expansion failed");
}

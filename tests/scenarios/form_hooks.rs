//! Test: Configuration form hooks
//!
//! Validation of the target project field and autocompletion of
//! project names.

use crate::helpers::*;
use pollscm_condition::core::{
    auto_complete_project, check_project, FormValidation, Permission, PollingResult,
};
use pollscm_condition::host::{Registry, StaticProject};

fn registry() -> Registry {
    let mut registry = registry_with(vec![
        project_a(PollingResult::NoChanges),
        StaticProject::new("projectB").unreadable(),
        StaticProject::new("team/projectC"),
    ]);
    registry.add_item("team", "folder");
    registry
}

#[test]
fn test_valid_project() {
    assert_eq!(
        check_project(&registry(), Some("projectA"), Permission::Configure),
        FormValidation::Ok
    );
}

#[test]
fn test_validation_skipped_without_configure() {
    let registry = registry();
    assert!(check_project(&registry, Some("nope"), Permission::Read).is_ok());
    assert!(check_project(&registry, None, Permission::None).is_ok());
}

#[test]
fn test_blank_input() {
    let registry = registry();
    let expected = FormValidation::Error("No project specified".to_string());
    assert_eq!(check_project(&registry, None, Permission::Configure), expected);
    assert_eq!(check_project(&registry, Some("   "), Permission::Configure), expected);
}

#[test]
fn test_unknown_project_suggests_nearest() {
    let result = check_project(&registry(), Some("projctA"), Permission::Configure);
    assert_eq!(
        result,
        FormValidation::Error("No such project ‘projctA’. Did you mean ‘projectA’?".to_string())
    );
}

#[test]
fn test_unknown_project_in_empty_registry() {
    let result = check_project(&Registry::new(), Some("projectA"), Permission::Configure);
    assert_eq!(
        result,
        FormValidation::Error("No such project ‘projectA’.".to_string())
    );
}

#[test]
fn test_non_project_item() {
    let result = check_project(&registry(), Some("team"), Permission::Configure);
    assert_eq!(
        result,
        FormValidation::Error("‘team’ is not buildable".to_string())
    );
}

#[test]
fn test_autocomplete_prefix() {
    let names = auto_complete_project(&registry(), "proj");
    assert_eq!(names, vec!["projectA".to_string()]);
}

#[test]
fn test_autocomplete_empty_prefix_lists_readable_jobs() {
    let names = auto_complete_project(&registry(), "");
    assert_eq!(
        names,
        vec![
            "thisProject".to_string(),
            "projectA".to_string(),
            "team/projectC".to_string(),
        ]
    );
}

#[test]
fn test_autocomplete_no_match() {
    assert!(auto_complete_project(&registry(), "zzz").is_empty());
}

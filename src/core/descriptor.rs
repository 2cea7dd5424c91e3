//! Configuration-form hooks: project name validation and autocompletion

use crate::core::project::{ItemKind, Permission, ProjectDirectory};
use serde::Serialize;
use std::fmt;

/// Result of validating a form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "lowercase")]
pub enum FormValidation {
    Ok,
    Error(String),
}

impl FormValidation {
    pub fn is_ok(&self) -> bool {
        matches!(self, FormValidation::Ok)
    }
}

impl fmt::Display for FormValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormValidation::Ok => write!(f, "OK"),
            FormValidation::Error(message) => write!(f, "{}", message),
        }
    }
}

/// Validate a candidate target project name
///
/// Callers without configure permission get `Ok` and no lookup happens.
pub fn check_project(
    directory: &dyn ProjectDirectory,
    candidate: Option<&str>,
    permission: Permission,
) -> FormValidation {
    if permission < Permission::Configure {
        return FormValidation::Ok;
    }

    let name = candidate.unwrap_or_default();
    if name.trim().is_empty() {
        return FormValidation::Error("No project specified".to_string());
    }

    match directory.item_kind(name) {
        None => {
            let message = match nearest_project(directory, name) {
                Some(nearest) => format!(
                    "No such project ‘{}’. Did you mean ‘{}’?",
                    name, nearest
                ),
                None => format!("No such project ‘{}’.", name),
            };
            FormValidation::Error(message)
        }
        Some(ItemKind::Other(_)) => FormValidation::Error(format!("‘{}’ is not buildable", name)),
        Some(ItemKind::Project) => FormValidation::Ok,
    }
}

/// Readable job names starting with `prefix`, in directory order
pub fn auto_complete_project(directory: &dyn ProjectDirectory, prefix: &str) -> Vec<String> {
    directory
        .jobs()
        .into_iter()
        .filter(|job| job.full_name.starts_with(prefix) && job.readable)
        .map(|job| job.full_name)
        .collect()
}

/// Closest project name by edit distance, first one wins on ties
fn nearest_project(directory: &dyn ProjectDirectory, name: &str) -> Option<String> {
    directory
        .jobs()
        .into_iter()
        .filter(|job| matches!(directory.item_kind(&job.full_name), Some(ItemKind::Project)))
        .map(|job| (edit_distance(name, &job.full_name), job.full_name))
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, full_name)| full_name)
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut cur = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        cur[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != *cb);
            cur[j + 1] = substitution.min(prev[j + 1] + 1).min(cur[j] + 1);
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev[b.len()]
}

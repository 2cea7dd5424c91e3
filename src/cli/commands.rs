//! CLI command definitions

use crate::core::Permission;
use clap::Args;

/// Evaluate the condition
#[derive(Debug, Args, Clone)]
pub struct EvaluateCommand {
    /// Path to registry YAML file
    #[arg(short, long)]
    pub registry: String,

    /// Target project pattern, may reference ${VARS}
    #[arg(short, long)]
    pub project: String,

    /// Build environment entries (key=value)
    #[arg(long, value_parser = parse_key_value)]
    pub env: Vec<(String, String)>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Validate a target project name
#[derive(Debug, Args, Clone)]
pub struct CheckCommand {
    /// Path to registry YAML file
    #[arg(short, long)]
    pub registry: String,

    /// Candidate project name
    #[arg(short, long)]
    pub project: Option<String>,

    /// Caller's permission on the configured item
    #[arg(long, value_enum, default_value_t = PermissionArg::Configure)]
    pub permission: PermissionArg,
}

/// Autocomplete project names
#[derive(Debug, Args, Clone)]
pub struct CompleteCommand {
    /// Path to registry YAML file
    #[arg(short, long)]
    pub registry: String,

    /// Name prefix to match
    #[arg(long, default_value = "")]
    pub prefix: String,
}

/// Permission argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PermissionArg {
    None,
    Read,
    Configure,
}

impl From<PermissionArg> for Permission {
    fn from(arg: PermissionArg) -> Self {
        match arg {
            PermissionArg::None => Permission::None,
            PermissionArg::Read => Permission::Read,
            PermissionArg::Configure => Permission::Configure,
        }
    }
}

/// Parse key=value pairs
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let parts: Vec<&str> = s.splitn(2, '=').collect();
    if parts.len() != 2 {
        return Err(format!("Invalid key=value pair: {}", s));
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}

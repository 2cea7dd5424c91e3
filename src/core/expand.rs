//! Variable expansion for project name patterns
//!
//! Supports the orchestrator's macro forms:
//! - `${NAME}` - braced reference, dots allowed (`${build.user}`)
//! - `$NAME` - bare reference, letters, digits and underscores
//! - `$$` - escaped literal `$`
//!
//! References to variables missing from the environment are left as-is.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;

static BARE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$([A-Za-z_][A-Za-z0-9_]*)").unwrap());

static BRACED_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_.]*$").unwrap());

/// Malformed variable reference in a pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpansionError {
    #[error("unterminated variable reference at offset {offset}")]
    Unterminated { offset: usize },

    #[error("empty variable reference at offset {offset}")]
    EmptyName { offset: usize },

    #[error("invalid variable name '{name}' at offset {offset}")]
    InvalidName { name: String, offset: usize },
}

/// Expansion service the condition depends on
pub trait Expander: Send + Sync {
    fn expand(
        &self,
        pattern: &str,
        env: &HashMap<String, String>,
    ) -> Result<String, ExpansionError>;
}

/// Default expander following the orchestrator's macro rules
#[derive(Debug, Clone, Copy, Default)]
pub struct MacroExpander;

impl Expander for MacroExpander {
    fn expand(
        &self,
        pattern: &str,
        env: &HashMap<String, String>,
    ) -> Result<String, ExpansionError> {
        expand(pattern, env)
    }
}

/// Expand every variable reference in `pattern` using `env`
pub fn expand(pattern: &str, env: &HashMap<String, String>) -> Result<String, ExpansionError> {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;
    let mut offset = 0;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let at = offset + pos;
        let tail = &rest[pos..];

        let consumed = if tail.starts_with("$$") {
            out.push('$');
            2
        } else if tail.starts_with("${") {
            let close = tail
                .find('}')
                .ok_or(ExpansionError::Unterminated { offset: at })?;
            let name = &tail[2..close];
            if name.is_empty() {
                return Err(ExpansionError::EmptyName { offset: at });
            }
            if !BRACED_NAME.is_match(name) {
                return Err(ExpansionError::InvalidName {
                    name: name.to_string(),
                    offset: at,
                });
            }
            match env.get(name) {
                Some(value) => out.push_str(value),
                None => out.push_str(&tail[..=close]),
            }
            close + 1
        } else if let Some(caps) = BARE_REF.captures(tail) {
            let whole = &caps[0];
            match env.get(&caps[1]) {
                Some(value) => out.push_str(value),
                None => out.push_str(whole),
            }
            whole.len()
        } else {
            out.push('$');
            1
        };

        rest = &tail[consumed..];
        offset = at + consumed;
    }

    out.push_str(rest);
    Ok(out)
}

//! CLI output formatting

use crate::core::FormValidation;
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");

/// Format a verdict for display
pub fn format_verdict(verdict: bool) -> String {
    if verdict {
        format!("{}{}", CHECK, style("run").green())
    } else {
        format!("{}{}", CROSS, style("skip").red())
    }
}

/// Format a build log line
pub fn format_log_line(line: &str) -> String {
    format!("  {}", style(line).dim())
}

/// Format a validation result for display
pub fn format_validation(result: &FormValidation) -> String {
    match result {
        FormValidation::Ok => format!("{}{}", CHECK, style("OK").green()),
        FormValidation::Error(message) => format!("{}{}", CROSS, style(message).red()),
    }
}

//! Evaluation context - environment and build log for one call

use std::collections::HashMap;
use std::io::Write;

/// Append-only sink for build log lines
pub trait BuildLog {
    fn append(&mut self, line: &str);
}

impl BuildLog for Vec<String> {
    fn append(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Build log backed by any writer (stdout, a log file)
///
/// Write errors are dropped; a broken console must not change a verdict.
pub struct WriterLog<W: Write> {
    writer: W,
}

impl<W: Write> WriterLog<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> BuildLog for WriterLog<W> {
    fn append(&mut self, line: &str) {
        let _ = writeln!(self.writer, "{}", line);
    }
}

/// Per-invocation context supplied by the triggering build
///
/// Borrowed for the duration of a single evaluation.
pub struct EvaluationContext<'a> {
    /// Environment of the triggering build
    pub env: &'a HashMap<String, String>,

    /// Where the decision narrative goes
    pub log: &'a mut dyn BuildLog,
}

impl<'a> EvaluationContext<'a> {
    pub fn new(env: &'a HashMap<String, String>, log: &'a mut dyn BuildLog) -> Self {
        Self { env, log }
    }

    /// Append a line to the build log
    pub fn log(&mut self, line: impl AsRef<str>) {
        self.log.append(line.as_ref());
    }
}

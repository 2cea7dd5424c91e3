//! Core domain: the poll-SCM condition and the host capabilities it reads
//!
//! This module defines the condition itself, its evaluation context,
//! variable expansion, and the traits a host implements to expose its
//! projects.

pub mod condition;
pub mod context;
pub mod descriptor;
pub mod expand;
pub mod project;

pub use condition::*;
pub use context::*;
pub use descriptor::*;
pub use expand::{expand, Expander, ExpansionError, MacroExpander};
pub use project::*;

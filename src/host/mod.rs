//! In-memory host orchestrator
//!
//! A YAML-described project registry that stands in for the real
//! orchestrator: the CLI loads it from a file, tests build it directly.

pub mod config;
pub mod registry;

pub use config::RegistryConfig;
pub use registry::{Registry, StaticProject};

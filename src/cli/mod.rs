//! Command-line interface

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{CheckCommand, CompleteCommand, EvaluateCommand};

/// Evaluate the poll-SCM run condition against a project registry
#[derive(Debug, Parser, Clone)]
#[command(name = "pollscm-condition")]
#[command(version = "0.1.0")]
#[command(about = "Gate a build step on another project's SCM changes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Evaluate the condition for a target project
    Evaluate(EvaluateCommand),

    /// Validate a target project name as the configuration form would
    Check(CheckCommand),

    /// List project names matching a prefix
    Complete(CompleteCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}

use std::ffi::OsString;

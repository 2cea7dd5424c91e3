use anyhow::{Context, Result};
use pollscm_condition::cli::commands::{CheckCommand, CompleteCommand, EvaluateCommand};
use pollscm_condition::cli::output::*;
use pollscm_condition::cli::{Cli, Command};
use pollscm_condition::core::{
    auto_complete_project, check_project, EvaluationContext, PollScmCondition, RunCondition,
};
use pollscm_condition::host::{Registry, RegistryConfig};
use std::collections::HashMap;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    match &cli.command {
        Command::Evaluate(cmd) => evaluate(cmd)?,
        Command::Check(cmd) => check(cmd)?,
        Command::Complete(cmd) => complete(cmd)?,
    }

    Ok(())
}

fn load_registry(path: &str) -> Result<Registry> {
    let config = RegistryConfig::from_file(path)
        .with_context(|| format!("Failed to load registry {}", path))?;
    debug!(
        "Loaded registry with {} projects and {} other items",
        config.projects.len(),
        config.items.len()
    );
    Ok(config.to_registry())
}

fn evaluate(cmd: &EvaluateCommand) -> Result<()> {
    let registry = load_registry(&cmd.registry)?;
    let env: HashMap<String, String> = cmd.env.iter().cloned().collect();
    let condition = PollScmCondition::new(cmd.project.as_str());

    let mut lines: Vec<String> = Vec::new();
    let verdict = {
        let mut ctx = EvaluationContext::new(&env, &mut lines);
        condition.prebuild(&mut ctx, &registry) && condition.run_perform(&mut ctx, &registry)
    };

    if cmd.json {
        let data = serde_json::json!({
            "condition": condition,
            "verdict": verdict,
            "log": lines,
        });
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        println!(
            "{} {}: {}",
            INFO,
            condition.display_name(),
            style(condition.project()).bold()
        );
        for line in &lines {
            println!("{}", format_log_line(line));
        }
        println!("{}", format_verdict(verdict));
    }

    if !verdict {
        std::process::exit(1);
    }

    Ok(())
}

fn check(cmd: &CheckCommand) -> Result<()> {
    let registry = load_registry(&cmd.registry)?;
    let result = check_project(&registry, cmd.project.as_deref(), cmd.permission.into());

    println!("{}", format_validation(&result));

    if !result.is_ok() {
        std::process::exit(1);
    }

    Ok(())
}

fn complete(cmd: &CompleteCommand) -> Result<()> {
    let registry = load_registry(&cmd.registry)?;

    for name in auto_complete_project(&registry, &cmd.prefix) {
        println!("{}", name);
    }

    Ok(())
}

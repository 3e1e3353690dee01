//! Genealogy CLI - outline-to-tree compiler for family-tree diagrams
//!
//! Usage: genealogy <COMMAND>
//!
//! Commands:
//!   build      Compile an outline document into a JSON tree
//!   uppercase  Uppercase every name in a JSON tree, in place
//!   extract    Cut part of a JSON tree out into a new file
//!   show       Print the tree as an indented outline
//!   stats      Summarise a tree

mod cli;
mod commands;
mod logging;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use genealogy::config::ConfigWarning;
use genealogy::Config;

use cli::{Cli, Commands};
use commands::build::BuildArgs;
use commands::show::ShowArgs;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, warnings) = load_config(cli.config.as_deref())?;
    logging::init(cli.verbose, config.output.verbosity);
    for warning in &warnings {
        warn_unknown_key(warning);
    }

    match cli.command {
        Commands::Build {
            source,
            output,
            clamp_orphans,
            root_label,
            stdout,
        } => commands::build::cmd_build(
            &config,
            BuildArgs {
                source,
                output,
                clamp_orphans,
                root_label,
                stdout,
            },
            cli.json,
        ),
        Commands::Uppercase { file } => commands::uppercase::cmd_uppercase(&file, cli.json),
        Commands::Extract {
            input,
            name,
            output,
            mode,
        } => commands::extract::cmd_extract(&input, &name, &output, mode, cli.json),
        Commands::Show {
            input,
            collapse,
            expand,
            depth,
            expand_all,
            collapse_all,
            wrap,
        } => commands::show::cmd_show(
            &config,
            ShowArgs {
                input,
                collapse,
                expand,
                depth,
                expand_all,
                collapse_all,
                wrap,
            },
            cli.json,
        ),
        Commands::Stats { input } => commands::show::cmd_stats(&config, input, cli.json),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<(Config, Vec<ConfigWarning>)> {
    match explicit {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            Ok((config.with_env_overrides(), warnings))
        }
        None => {
            let cwd = std::env::current_dir()?;
            Ok(Config::load_or_default(Some(&cwd))?)
        }
    }
}

fn warn_unknown_key(warning: &ConfigWarning) {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    match &warning.suggestion {
        Some(suggestion) => tracing::warn!(
            "unknown config key '{}' in {} (did you mean '{}'?)",
            warning.key,
            location,
            suggestion
        ),
        None => tracing::warn!("unknown config key '{}' in {}", warning.key, location),
    }
}

//! Command dispatch: traversal subcommands load settings and drive the services

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::{TraversalReport, TraversalService, Verification};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::CliResult;
use crate::config::{global_config_path, Settings};
use crate::domain::{data_label, sample_tree, Order, Strategy};
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        Some(Commands::Show) => cmd_show(),
        Some(Commands::Config { command }) => cmd_config(cli, command),
        command => {
            let settings = Settings::load(cli.config.as_deref())?;
            match command {
                Some(Commands::Run {
                    order,
                    strategy,
                    display,
                }) => cmd_run(apply_run_flags(settings, order, strategy, *display)),
                Some(Commands::Verify) => cmd_verify(settings),
                _ => cmd_run(settings),
            }
        }
    }
}

/// Command line flags override the loaded settings; empty lists keep them.
fn apply_run_flags(
    mut settings: Settings,
    orders: &[Order],
    strategies: &[Strategy],
    display: bool,
) -> Settings {
    if !orders.is_empty() {
        settings.orders = orders.to_vec();
    }
    if !strategies.is_empty() {
        settings.strategies = strategies.to_vec();
    }
    settings.display |= display;
    settings
}

/// Lines printed below a report's label, one per visited node.
fn report_lines(report: &TraversalReport, display: bool) -> Vec<String> {
    report
        .values
        .iter()
        .map(|&value| {
            if display {
                data_label(value)
            } else {
                value.to_string()
            }
        })
        .collect()
}

#[instrument(level = "debug", skip_all)]
fn cmd_run(settings: Settings) -> CliResult<()> {
    debug!("settings: {:?}", settings);
    let service = TraversalService::new(settings);
    let root = sample_tree();
    let display = service.settings().display;

    for report in service.run(Some(&root))? {
        output::header(&report.label());
        for line in report_lines(&report, display) {
            output::info(&line);
        }
    }
    Ok(())
}

fn cmd_show() -> CliResult<()> {
    let root = sample_tree();
    output::info(&root.to_tree_string());
    Ok(())
}

fn joined(values: &[i32]) -> String {
    values
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn verification_line(verification: &Verification) -> String {
    if verification.is_consistent() {
        format!("{}: [{}]", verification.order, joined(&verification.recursive))
    } else {
        format!(
            "{}: recursive [{}] != iterative [{}]",
            verification.order,
            joined(&verification.recursive),
            joined(&verification.iterative)
        )
    }
}

#[instrument(level = "debug", skip_all)]
fn cmd_verify(settings: Settings) -> CliResult<()> {
    let service = TraversalService::new(settings);
    let root = sample_tree();
    let verifications = service.verify(Some(&root))?;

    output::header("Recursive vs iterative");
    for verification in &verifications {
        if verification.is_consistent() {
            output::success_detail(&verification_line(verification));
        } else {
            output::failure(&verification_line(verification));
        }
    }

    if let Some(mismatch) = verifications.into_iter().find(|v| !v.is_consistent()) {
        mismatch.into_result()?;
    }
    Ok(())
}

fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(cli.config.as_deref())?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => {
                    let state = if path.exists() { "" } else { " (not found)" };
                    output::info(&format!("global: {}{}", path.display(), state));
                }
                None => output::info("global: <no config directory>"),
            }
            if let Some(path) = &cli.config {
                output::info(&format!("file:   {}", path.display()));
            }
        }
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

use std::io::Read;
use std::path::Path;

use clap::Parser;
use eyre::Result;
use inpl_core::models::AnswerRecord;
use inpl_scoring::Scorer;
use inpl_scoring::norms::NormativeTable;
use inpl_scoring::report::ScoringReport;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;

use cli::Cli;
use config::ReportConfig;

fn main() -> Result<()> {
    color_eyre::install()?;

    // Structured JSON logs on stderr; stdout carries the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();
    let report = run(&cli)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    Ok(())
}

/// Load config and norms, then score the input record.
fn run(cli: &Cli) -> Result<ScoringReport> {
    let config = effective_config(cli, config::load_config(cli.config.as_deref())?);

    let custom_norms = config
        .norms_path
        .as_deref()
        .map(|path| {
            NormativeTable::from_path(path).map_err(|e| {
                eyre::eyre!("failed to load normative table {}: {e}", path.display())
            })
        })
        .transpose()?;
    let norms = custom_norms
        .as_ref()
        .unwrap_or_else(|| NormativeTable::embedded());

    let answers = read_answers(cli.input_path().map(|p| p.as_path()))?;
    let report = Scorer::new(norms, config.missing_scores).report(&answers);
    info!(
        tests = report.results.len(),
        missing_scores = ?config.missing_scores,
        "report computed"
    );

    Ok(report)
}

/// Command-line flags override file values.
fn effective_config(cli: &Cli, mut config: ReportConfig) -> ReportConfig {
    if let Some(policy) = cli.missing_scores {
        config.missing_scores = policy.into();
    }
    if let Some(path) = &cli.norms {
        config.norms_path = Some(path.clone());
    }
    config
}

/// Read one answer record from `path`, or from stdin when `None`.
fn read_answers(path: Option<&Path>) -> Result<AnswerRecord> {
    let contents = match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read answers at {}: {e}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    Ok(AnswerRecord::from_json_str(&contents)?)
}

//! Kitty command-line front end.
//!
//! Reads a list snapshot from JSON, runs the settlement engine and prints
//! the result as JSON on stdout. Logs go to stderr.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use kitty_core::{EngineOptions, LedgerSnapshot, LedgerSummary, ReimbursementDraft, SettlementEngine};
use kitty_shared::types::Currency;
use kitty_shared::{AppConfig, AppError, AppResult};

#[derive(Parser, Debug)]
#[command(name = "kitty")]
#[command(about = "Balances and settlements for shared expense lists")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute balances and settlements for a snapshot file.
    Summarize(SummarizeArgs),
}

#[derive(Args, Debug)]
struct SummarizeArgs {
    /// Path to a JSON list snapshot.
    snapshot: PathBuf,

    /// Ignore expenses dated after this day (YYYY-MM-DD).
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Also emit pending reimbursement drafts.
    #[arg(long)]
    reimburse: bool,

    /// Override the configured settlement currency.
    #[arg(long)]
    currency: Option<Currency>,

    /// Creation date for reimbursement drafts. Defaults to today.
    #[arg(long, requires = "reimburse")]
    on: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct Report {
    #[serde(flatten)]
    summary: LedgerSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    reimbursements: Option<Vec<ReimbursementDraft>>,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            let err = AppError::from(err);
            eprintln!("{err}");
            return exit_code(&err);
        }
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            error!(error = %format!("{err:#}"), "Command failed");
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn exit_code(err: &AppError) -> ExitCode {
    ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
}

fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    match cli.command {
        Command::Summarize(args) => {
            let report = summarize(&args, config)?;
            let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
            println!("{json}");
            Ok(())
        }
    }
}

fn summarize(args: &SummarizeArgs, config: &AppConfig) -> anyhow::Result<Report> {
    let mut options = EngineOptions::from(&config.settlement);
    if let Some(currency) = args.currency {
        options.currency = currency;
    }
    let engine = SettlementEngine::new(options);

    let mut snapshot = load_snapshot(&args.snapshot)?;
    if let Some(date) = args.as_of {
        snapshot = snapshot.as_of(date);
    }
    info!(
        path = %args.snapshot.display(),
        currency = %options.currency,
        members = snapshot.members.len(),
        expenses = snapshot.expenses.len(),
        "Loaded snapshot"
    );

    let summary = engine.summarize(&snapshot).map_err(AppError::from)?;

    let reimbursements = args.reimburse.then(|| {
        let created_on = args
            .on
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        engine.drafts_for(snapshot.list_id, &summary, created_on)
    });

    Ok(Report {
        summary,
        reimbursements,
    })
}

fn load_snapshot(path: &Path) -> AppResult<LedgerSnapshot> {
    let raw = std::fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => AppError::NotFound(path.display().to_string()),
        _ => AppError::Internal(format!("{}: {err}", path.display())),
    })?;
    serde_json::from_str(&raw)
        .map_err(|err| AppError::Validation(format!("{}: {err}", path.display())))
}

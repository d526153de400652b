//! Fundline report CLI
//!
//! Loads a budget line snapshot and prints funding summaries, group counts,
//! totals, paged line tables, or a CSV export.

mod commands;
mod input;
mod render;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use fundline_core::export::write_budget_lines_csv;
use fundline_shared::config::LoggingConfig;
use fundline_shared::{AppConfig, AppError, OutputFormat};

use commands::CountBy;
use input::Snapshot;

#[derive(Parser, Debug)]
#[command(name = "fundline")]
#[command(about = "Budget line totals, counts, and funding summaries")]
struct Args {
    /// Snapshot JSON with budget lines and funding figures
    #[arg(short, long, env = "FUNDLINE_INPUT", default_value = "snapshot.json", global = true)]
    input: PathBuf,

    /// Output format: json or table (default from report.default_format)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Funding summary, status series, and over-budget flag
    Summary,

    /// Count budget lines by a grouping key
    Counts {
        /// Grouping key
        #[arg(long, value_enum, default_value_t = CountBy::Status)]
        by: CountBy,
    },

    /// Subtotal, fees, and total
    Totals {
        /// Only lines planned for this fiscal year
        #[arg(long)]
        fiscal_year: Option<i32>,

        /// Only Planned, Executing, and Obligated lines
        #[arg(long)]
        spending_only: bool,
    },

    /// Paged table of budget lines, newest first
    Lines {
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Rows per page (default from report.page_size)
        #[arg(long)]
        per_page: Option<u32>,
    },

    /// Write budget lines as CSV
    Export {
        /// Destination file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replay agreement wizard actions and print the resulting draft
    Draft {
        /// JSON array of draft actions
        actions: PathBuf,
    },
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = match AppConfig::load().map_err(AppError::from) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return exit_code(&err);
        }
    };

    init_tracing(&config.logging);

    match run(Args::parse(), &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");
            eprintln!("error: {err:#}");
            err.downcast_ref::<AppError>()
                .map_or(ExitCode::FAILURE, exit_code)
        }
    }
}

fn exit_code(err: &AppError) -> ExitCode {
    ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| logging.filter.as_str().into());

    let (plain, json) = if logging.json {
        (None, Some(fmt::layer().json().with_writer(io::stderr)))
    } else {
        (Some(fmt::layer().with_writer(io::stderr)), None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(plain)
        .with(json)
        .init();
}

fn run(args: Args, config: &AppConfig) -> anyhow::Result<()> {
    let format = args.format.unwrap_or(config.report.default_format);
    let decimal_places = config.report.export_decimal_places;

    let rendered = match args.command {
        Command::Summary => commands::summary(&Snapshot::load(&args.input)?, format)?,
        Command::Counts { by } => commands::counts(&Snapshot::load(&args.input)?, by, format)?,
        Command::Totals {
            fiscal_year,
            spending_only,
        } => commands::totals(
            &Snapshot::load(&args.input)?,
            fiscal_year,
            spending_only,
            format,
        )?,
        Command::Lines { page, per_page } => commands::lines(
            &Snapshot::load(&args.input)?,
            page,
            per_page.unwrap_or(config.report.page_size),
            decimal_places,
        ),
        Command::Export { output } => {
            return export(&Snapshot::load(&args.input)?, output, decimal_places);
        }
        Command::Draft { actions } => {
            let text = fs::read_to_string(&actions).map_err(AppError::from)?;
            commands::draft(&text)?
        }
    };

    print_out(&rendered)
}

fn export(snapshot: &Snapshot, output: Option<PathBuf>, decimal_places: u32) -> anyhow::Result<()> {
    let rows = match &output {
        Some(path) => {
            let file = File::create(path).map_err(AppError::from)?;
            write_budget_lines_csv(&snapshot.budget_lines, decimal_places, BufWriter::new(file))
        }
        None => write_budget_lines_csv(&snapshot.budget_lines, decimal_places, io::stdout().lock()),
    }
    .map_err(commands::export_failure)?;

    if let Some(path) = output {
        info!(rows, path = %path.display(), "Export written");
    }
    Ok(())
}

fn print_out(text: &str) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes()).map_err(AppError::from)?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n").map_err(AppError::from)?;
    }
    Ok(())
}

//! report2csv CLI - Flatten an analytics report export into CSV
//!
//! ```bash
//! report2csv                                   # report.json + output_header.csv -> output.csv
//! report2csv export.json                       # custom report
//! report2csv export.json cols.csv              # custom report and header specification
//! report2csv export.json cols.csv out.csv      # all paths given
//! report2csv -v --cell-value value-or-label    # raw values instead of display labels
//! ```

use clap::{CommandFactory, Parser};
use report2csv::config::RunConfig;
use report2csv::logging::{init_logging, LogConfig};
use report2csv::{run, CellValuePolicy, ConfigError};
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "report2csv")]
#[command(about = "Convert an analytics report export (JSON) into CSV", long_about = None)]
struct Cli {
    /// Report JSON, header CSV and output CSV, in that order
    /// [defaults: report.json output_header.csv output.csv]
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Output field delimiter
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Which cell field to write
    #[arg(long, value_enum, default_value = "label")]
    cell_value: CellValuePolicy,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    // Load .env file (if present), e.g. for RUST_LOG
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_config = LogConfig::from_verbosity(cli.verbose, cli.quiet)
        .with_ansi(std::io::stderr().is_terminal());
    if let Err(e) = init_logging(&log_config) {
        eprintln!("Warning: logging unavailable: {}", e);
    }

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e @ ConfigError::TooManyArguments(_)) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", Cli::command().render_usage());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = cmd_convert(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn build_config(cli: &Cli) -> Result<RunConfig, ConfigError> {
    Ok(RunConfig::from_positionals(&cli.paths)?
        .with_delimiter(cli.delimiter)?
        .with_cell_value(cli.cell_value))
}

fn cmd_convert(config: &RunConfig) -> Result<(), Box<dyn std::error::Error>> {
    let summary = run(config)?;

    tracing::info!(
        rows = summary.rows_written,
        groups_without_rows = summary.groups_without_rows,
        header_encoding = %summary.header_encoding,
        "conversion finished"
    );

    if summary.skipped_rows > 0 {
        eprintln!("Skipped {} malformed rows", summary.skipped_rows);
    }
    println!("Output written: {}", summary.output.display());

    Ok(())
}

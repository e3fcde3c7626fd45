// ============================================================================
// bfbs
// Command-line front end: per-column decimal statistics for CSV files
// ============================================================================

use clap::Parser;
use decimal_stats::prelude::*;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const PROGRAM_NAME: &str = "bfbs";

/// Calculate count, min, max, range, sum, mean, median, variance and
/// standard deviation for every column of one or more CSV files.
#[derive(Parser, Debug)]
#[command(name = PROGRAM_NAME, version, about)]
#[command(override_usage = "bfbs [OPTIONS] file1 [file2 ...]")]
struct Cli {
    /// Input CSV files
    files: Vec<PathBuf>,

    /// Treat first row as a title for each column of data
    #[arg(short = 'H', long = "header")]
    has_header: bool,

    /// Calculation precision in significant digits (clamped to 2..=1024)
    #[arg(
        short = 'P',
        long,
        default_value_t = i64::from(Precision::DEFAULT.digits()),
        allow_negative_numbers = true,
        value_parser = saturating_int
    )]
    precision: i64,

    /// Printed significant digits (clamped to 2..=precision; default: precision)
    #[arg(short = 'p', long, allow_negative_numbers = true, value_parser = saturating_int)]
    digits: Option<i64>,

    /// Lines starting with this prefix are ignored
    #[arg(short = 'c', long = "comment-char", default_value = "#")]
    comment_prefix: String,

    /// Number of lines to skip at the start of each file
    #[arg(short = 's', long = "skip", default_value_t = 0)]
    skip_lines: usize,

    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

/// Integer argument that saturates at the `i64` bounds instead of failing,
/// so any digit count is clamped later rather than rejected.
fn saturating_int(arg: &str) -> Result<i64, String> {
    let digits = arg.strip_prefix(|c| c == '-' || c == '+').unwrap_or(arg);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("'{}' is not an integer", arg));
    }
    Ok(arg.parse().unwrap_or(if arg.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    }))
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        let precision = Precision::clamped(self.precision);
        let mut config = RunConfig::new(precision)
            .with_header(self.has_header)
            .with_comment_prefix(self.comment_prefix.clone())
            .with_skip_lines(self.skip_lines);
        if let Some(digits) = self.digits {
            config = config.with_output_digits(Precision::clamped(digits));
        }
        config
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.files.is_empty() {
        eprintln!("Error: No filenames provided. Use -h for help.");
        return ExitCode::from(1);
    }

    let config = cli.run_config();
    let pipeline = match TablePipeline::from_config(config) {
        Ok(pipeline) => pipeline,
        Err(reason) => {
            eprintln!("Error: {}", reason);
            return ExitCode::from(1);
        },
    };

    let config = pipeline.config();
    println!("{} version {}", PROGRAM_NAME, env!("CARGO_PKG_VERSION"));
    println!(
        "Using {} digits of decimal precision.",
        config.precision.digits()
    );
    if config.output_digits != config.precision {
        println!("Printing {} significant digits.", config.output_digits.digits());
    }

    let sink = LoggingReportSink::new(TextReportSink::new(io::stdout(), config.output_digits));
    let summary = pipeline.run(&cli.files[..], &sink);

    tracing::debug!(
        processed = summary.files_processed,
        failed = summary.files_failed,
        "run complete"
    );
    println!(
        "{} execution time was {:.6} [sec]",
        PROGRAM_NAME,
        summary.elapsed.as_secs_f64()
    );

    ExitCode::SUCCESS
}

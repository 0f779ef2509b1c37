//! benford - leading digit analysis against Benford's Law.
//!
//! Reads one value per line, extracts each value's first non-zero digit and
//! writes a spreadsheet with the observed distribution, the Benford
//! reference distribution and a side-by-side comparison.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::path::PathBuf;
use std::process;

use benford_core::report::{self, DEFAULT_WORKBOOK_PATH};
use benford_core::{Analysis, fmt, input};
use clap::Parser;
use tracing::{Level, debug, error, info};
use tracing_subscriber::EnvFilter;

/// Leading digit distribution vs. Benford's Law.
#[derive(Parser, Debug)]
#[command(
    name = "benford",
    about = "Leading digit distribution vs. Benford's Law",
    version = benford_core::VERSION
)]
struct Args {
    /// Input file with one numeric value per line.
    #[arg(default_value = "file_sizes.txt", env = "BENFORD_INPUT")]
    input: PathBuf,

    /// Output spreadsheet path.
    #[arg(short, long, default_value = DEFAULT_WORKBOOK_PATH, env = "BENFORD_OUTPUT")]
    output: PathBuf,

    /// Skip writing the spreadsheet.
    #[arg(long)]
    no_xlsx: bool,

    /// Also write the tables as JSON ("-" for stdout).
    #[arg(long, value_name = "PATH", env = "BENFORD_JSON")]
    json: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber. `RUST_LOG` takes precedence when set.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("benford={},benford_core={}", level, level)));

    // Logs go to stderr so `--json -` output stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> benford_core::Result<()> {
    info!("Reading {}", args.input.display());
    let lines = input::read_lines(&args.input)?;
    let analysis = Analysis::from_lines(lines.iter().map(String::as_str));
    info!(
        "Extracted {} leading digits from {} lines ({} skipped)",
        analysis.total(),
        analysis.lines_scanned(),
        analysis.lines_skipped()
    );

    let write_xlsx = !args.no_xlsx;
    if write_xlsx {
        report::xlsx::write_workbook(&analysis, &args.output)?;
    } else {
        debug!("Spreadsheet output disabled");
    }

    if let Some(ref json_path) = args.json {
        let source = args.input.to_string_lossy();
        report::json::write_json(&analysis, &source, json_path)?;
    }

    // Keep stdout free for JSON when it is the JSON destination.
    let summary = fmt::format_summary(&analysis, write_xlsx);
    if args.json.as_deref().is_some_and(|p| p.as_os_str() == "-") {
        eprint!("{}", summary);
    } else {
        print!("{}", summary);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    debug!("benford {} starting: {:?}", benford_core::VERSION, args);

    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

use anyhow::Result;
use clap::{ArgAction, Parser};
use findnames::{SearchOptions, run};
use log::LevelFilter;

use std::io;
use std::process::ExitCode;

/// Report which files mention the names listed in a names file
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Ignore blank lines in the names file instead of matching them everywhere
    #[arg(short, long)]
    skip_blank: bool,
    /// Log diagnostics to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Names file followed by the files to search
    files: Vec<String>,
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::new();
    if std::env::var_os("RUST_LOG").is_some() {
        builder.parse_default_env();
    } else {
        builder.filter_level(match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        });
    }
    builder.format_timestamp(None).init();
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = SearchOptions {
        skip_blank: args.skip_blank,
    };
    let outcome = run(&args.files, options, &mut io::stdout().lock())?;
    if outcome.is_completed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

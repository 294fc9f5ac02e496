use std::io::{self, prelude::*};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::*;
use log::*;
use structopt::StructOpt;

use smallest_free_number::cli::{self, print_timing, FATAL_EXIT_CODE};
use smallest_free_number::finder;
use smallest_free_number::parse::{self, ParseMode};
use smallest_free_number::rows::write_rows;

/// Finds the smallest non-negative integer not contained in a file.
///
/// Numbers can be separated by any mix of spaces, tabs, commas,
/// semicolons, pipes, and newlines.
#[derive(Debug, StructOpt)]
#[structopt(verbatim_doc_comment)]
struct Args {
    /// Verbosity (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,

    #[structopt(short, long, case_insensitive = true, default_value = "auto")]
    #[structopt(name = "always/auto/never")]
    color: logsetup::Color,

    /// Prepend ISO-8601 timestamps to all messages
    /// (from --verbose). Useful for benchmarking.
    #[structopt(short, long, verbatim_doc_comment)]
    timestamps: bool,

    /// Print the numbers read and the bitmap built from them
    #[structopt(short, long)]
    debug: bool,

    /// Fail on tokens that aren't integers
    /// instead of reading their leading digits (or 0).
    #[structopt(short, long, verbatim_doc_comment)]
    strict: bool,

    /// The file of numbers to read
    #[structopt(short, long, name = "filename")]
    file: PathBuf,
}

const LONG_OPTIONS: &[&str] = &["verbose", "color", "timestamps", "debug", "strict", "file"];

fn main() {
    run().unwrap_or_else(|e| {
        error!("{:?}", e);
        std::process::exit(FATAL_EXIT_CODE);
    });
}

fn run() -> Result<()> {
    let args: Args = cli::parse_args(LONG_OPTIONS);
    logsetup::init_logger(args.verbose, args.timestamps, args.color)?;

    let mode = if args.strict {
        ParseMode::Strict
    } else {
        ParseMode::default()
    };

    let read_start = Instant::now();
    let numbers = parse::read_numbers_file(&args.file, mode)?;
    print_timing(&format!("Reading {}", args.file.display()), &read_start);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.debug {
        write_rows(&numbers, &mut out)?;
    }

    let search_start = Instant::now();
    let search = finder::search(&numbers)?;
    print_timing("Search", &search_start);

    if args.debug {
        match search.bitmap() {
            Some(bitmap) => bitmap.write_hex(&mut out)?,
            None => debug!("Took the short-circuit path; no bitmap to print"),
        }
    }

    writeln!(out, "Smallest integer not contained = {}", search.answer())?;
    out.flush()?;
    Ok(())
}

use std::io::{self, prelude::*};

use anyhow::*;
use log::*;
use structopt::StructOpt;

use smallest_free_number::cli::{self, FATAL_EXIT_CODE};
use smallest_free_number::testdata;

/// Prints the integers 0 through <max>, optionally leaving one out,
/// as input for smallest-free-number.
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

    /// The number to leave out
    #[structopt(short, long, name = "missing_number")]
    empty_slot: Option<u64>,

    /// The largest number to print (inclusive)
    #[structopt(short, long, name = "max_number")]
    max: u64,
}

const LONG_OPTIONS: &[&str] = &["verbose", "color", "timestamps", "empty-slot", "max"];

fn main() {
    run().unwrap_or_else(|e| {
        error!("{:?}", e);
        std::process::exit(FATAL_EXIT_CODE);
    });
}

fn run() -> Result<()> {
    let args: Args = cli::parse_args(LONG_OPTIONS);
    logsetup::init_logger(args.verbose, args.timestamps, args.color)?;

    match args.empty_slot {
        Some(slot) if slot > args.max => {
            warn!("{} is past the max ({}); nothing will be left out", slot, args.max)
        }
        Some(slot) => info!("Printing 0 through {} without {}", args.max, slot),
        None => info!("Printing 0 through {}", args.max),
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    testdata::generate(args.max, args.empty_slot, &mut out).context("Couldn't write numbers")?;
    out.flush().context("Couldn't write numbers")?;
    Ok(())
}

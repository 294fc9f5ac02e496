//! Bits shared by the command line tools

use std::ffi::OsString;
use std::time::Instant;

use log::*;
use structopt::clap::{self, ErrorKind};
use structopt::StructOpt;

/// Exit code for usage errors and anything else fatal.
/// Shows up as 255 on Unix-y systems.
pub const FATAL_EXIT_CODE: i32 = -1;

pub fn print_timing(msg: &str, start: &Instant) {
    info!("{} took {:.3}s", msg, start.elapsed().as_secs_f32());
}

/// Parses the command line, or prints usage and bails.
///
/// Unlike `StructOpt::from_args()`, asking for `--help` counts as a failure.
/// `long_options` can also be given with a single dash (see `long_only()`).
pub fn parse_args<T: StructOpt>(long_options: &[&str]) -> T {
    parse_args_from(std::env::args_os(), long_options).unwrap_or_else(|e| usage_exit(e))
}

pub fn parse_args_from<T, I>(args: I, long_options: &[&str]) -> Result<T, clap::Error>
where
    T: StructOpt,
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    T::from_iter_safe(long_only(args, long_options))
}

/// Rewrites `-name` and `-name=value` to `--name`... for each of `long_options`
/// (plus help and version), like getopt_long_only() accepts.
/// Everything else, including bundled short flags like `-vv`, is left alone.
pub fn long_only<I>(args: I, long_options: &[&str]) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut rest_are_positional = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if rest_are_positional {
                return arg;
            }
            if arg == "--" {
                rest_are_positional = true;
                return arg;
            }
            match arg.to_str() {
                Some(s) if is_single_dash_long(s, long_options) => {
                    trace!("Treating {} as -{}", s, s);
                    OsString::from(format!("-{}", s))
                }
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_long(arg: &str, long_options: &[&str]) -> bool {
    let name = match arg.strip_prefix('-') {
        Some(n) if n.len() > 1 && !n.starts_with('-') => n,
        _ => return false,
    };
    let name = name.split('=').next().unwrap_or(name);
    long_options
        .iter()
        .chain(&["help", "version"])
        .any(|o| *o == name)
}

fn usage_exit(e: clap::Error) -> ! {
    match e.kind {
        ErrorKind::HelpDisplayed => println!("{}", e.message),
        // clap already printed it; exit happily.
        ErrorKind::VersionDisplayed => e.exit(),
        _ => eprintln!("{}", e.message),
    }
    std::process::exit(FATAL_EXIT_CODE);
}

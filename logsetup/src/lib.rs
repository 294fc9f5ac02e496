use anyhow::Context;
use log::LevelFilter;
use simplelog::*;
use structopt::clap::arg_enum;

arg_enum! {
    #[derive(Debug, Copy, Clone, PartialEq)]
    pub enum Color {
        Auto,
        Always,
        Never
    }
}

/// Maps -v, -vv, -vvv... onto a log level.
/// Warnings and errors are always shown.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn color_choice(color: Color) -> ColorChoice {
    match color {
        Color::Always => ColorChoice::AlwaysAnsi,
        Color::Auto => {
            if atty::is(atty::Stream::Stderr) {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            }
        }
        Color::Never => ColorChoice::Never,
    }
}

/// Set up simplelog to spit messages to stderr.
///
/// stdout is left alone for program output (results, debug dumps, generated data).
pub fn init_logger(verbosity: u8, timestamps: bool, color: Color) -> anyhow::Result<()> {
    let mut builder = ConfigBuilder::new();
    // Shut a bunch of stuff off - we're just spitting to stderr.
    builder.set_location_level(LevelFilter::Trace);
    builder.set_target_level(LevelFilter::Off);
    builder.set_thread_level(LevelFilter::Off);
    if timestamps {
        builder.set_time_format_str("%+");
        builder.set_time_level(LevelFilter::Error);
    } else {
        builder.set_time_level(LevelFilter::Off);
    }

    let level = level_for(verbosity);
    let config = builder.build();

    if cfg!(test) {
        TestLogger::init(level, config).context("Couldn't init test logger")
    } else {
        TermLogger::init(level, config.clone(), TerminalMode::Stderr, color_choice(color))
            .or_else(|_| SimpleLogger::init(level, config))
            .context("Couldn't init logger")
    }
}

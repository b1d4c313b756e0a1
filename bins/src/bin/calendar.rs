// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The Maija Calendar desktop app
//!

use clap::Parser;
use eframe::egui::ViewportBuilder;
use maija_calendar_core::{MAX_YEAR, MIN_YEAR, SelectedMonth};
use maija_calendar_gui::{CalendarApp, Config, DEFAULT_WINDOW_SIZES};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::path::PathBuf;

#[macro_use]
extern crate log;
extern crate simplelog;

/// A month calendar with a 30 day timeline of coloured, editable notes
#[derive(Parser, Debug)]
#[command(name = "calendar", version, about)]
struct Args {
    /// The year to show first (defaults to the current year)
    #[arg(long, value_parser = clap::value_parser!(i64).range(MIN_YEAR..=MAX_YEAR))]
    year: Option<i64>,

    /// The month to show first, 1 to 12 (defaults to the current month)
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..=12))]
    month: Option<i64>,

    /// Read the config from this file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Logging level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<LevelFilter>,
}

impl Args {
    /// The month to open on.  Missing parts come from today's date.
    fn initial_month(&self) -> SelectedMonth {
        let current = SelectedMonth::current();
        let year = self.year.unwrap_or(current.year().value() as i64);
        let month = self.month.unwrap_or(current.month().value() as i64);
        SelectedMonth::from(year, month).unwrap_or_else(|error| {
            warn!("{error}, opening on the current month");
            current
        })
    }
}

/// The log level when none is given
fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Entry point for the native GUI desktop application
fn main() -> Result<(), eframe::Error> {
    let args = Args::parse();

    // Setup logging
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("maija_calendar")
        .build();
    let log_level = args.log_level.unwrap_or_else(default_log_level);
    if let Err(error) = CombinedLogger::init(vec![TermLogger::new(
        log_level,
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]) {
        eprintln!("Unable to initialise logging: {error}");
    }

    // Create the calendar application
    let config = Config::load(args.config.as_deref());
    let calendar_app = CalendarApp::new(config, args.initial_month());

    // Setup the main window's default options
    let main_viewport_options = ViewportBuilder::default().with_inner_size([
        DEFAULT_WINDOW_SIZES.main_window.width,
        DEFAULT_WINDOW_SIZES.main_window.height,
    ]);

    // Setup the eframe options for a native application
    let options = eframe::NativeOptions {
        viewport: main_viewport_options,
        ..Default::default()
    };

    info!("Launching application");

    // Run the application
    eframe::run_native(
        "Maija Calendar",
        options,
        Box::new(|_cc| Ok(Box::new(calendar_app))),
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_args() {
        let args = Args::try_parse_from(["calendar", "--year", "2021", "--month", "2"]).unwrap();
        assert_eq!(args.initial_month(), SelectedMonth::from(2021, 2).unwrap());
        assert_eq!(args.log_level, None);

        let args = Args::try_parse_from(["calendar", "--log-level", "trace"]).unwrap();
        assert_eq!(args.log_level, Some(LevelFilter::Trace));
        assert_eq!(args.initial_month(), SelectedMonth::current());
    }

    #[test]
    fn out_of_range_args_are_rejected() {
        assert!(Args::try_parse_from(["calendar", "--month", "13"]).is_err());
        assert!(Args::try_parse_from(["calendar", "--year", "0"]).is_err());
        assert!(Args::try_parse_from(["calendar", "--year", "twenty"]).is_err());
    }

    #[test]
    fn year_only_keeps_the_current_month() {
        let args = Args::try_parse_from(["calendar", "--year", "1999"]).unwrap();
        let month = args.initial_month();
        assert_eq!(month.year().value(), 1999);
        assert_eq!(month.month(), SelectedMonth::current().month());
    }
}

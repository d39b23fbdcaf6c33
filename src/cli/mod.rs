//! Report CLI over the trip analytics services.

pub mod args;
pub mod report;
pub mod system_clock;
pub mod table;

use std::{env, io::Write};

use serde::Serialize;

use charter_config::{Config, ConfigManager};
use charter_core::{
    dates::{parse_iso_date, CALENDAR_MONTH_ORDER},
    Clock, StatusResolver, SummaryService, TripFilter,
};
use charter_domain::Trip;
use charter_storage_json::load_trips_from_path;

use crate::{
    errors::CliError,
    fixtures::{sample_trips, SAMPLE_MONTH_ORDER},
    utils::build_info,
};

pub use args::{parse_args, CliArgs, Command, USAGE};
pub use report::ReportRenderer;
pub use system_clock::SystemClock;

/// Runs the CLI against the process arguments, printing to stdout.
pub fn run_cli() -> Result<(), CliError> {
    let args = parse_args(env::args().skip(1))?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&args, &SystemClock, &mut out)
}

/// Executes one command. `clock` supplies the reference day unless `--today` is given.
pub fn run(args: &CliArgs, clock: &dyn Clock, out: &mut dyn Write) -> Result<(), CliError> {
    match args.command {
        Command::Help => {
            writeln!(out, "{USAGE}")?;
            return Ok(());
        }
        Command::Version => {
            writeln!(out, "{}", build_info::current())?;
            return Ok(());
        }
        _ => {}
    }

    let config = load_config(args)?;
    let source = load_trips(args, &config)?;
    let trips = &source.trips;
    let today = match args.today.as_deref() {
        Some(raw) => parse_iso_date(raw)?,
        None => clock.today(),
    };
    let renderer = ReportRenderer::new(&config, config.ui_color_enabled && !args.no_color);
    tracing::debug!(
        command = ?args.command,
        %today,
        trips = trips.len(),
        sample = source.sample,
        "running report"
    );

    match args.command {
        Command::Overview => {
            let overview = SummaryService::overview(trips, today);
            emit(out, args.json, &overview, || renderer.overview(&overview, today))
        }
        Command::Trips => {
            let criteria = args.criteria.parse()?;
            let filtered = TripFilter::apply(trips, &criteria, today);
            let rows = StatusResolver::annotate(&filtered, today);
            emit(out, args.json, &rows, || renderer.trips(&rows))
        }
        Command::Weekly => {
            let buckets = SummaryService::weekly_bookings(trips, today)?;
            emit(out, args.json, &buckets, || renderer.weekly(&buckets))
        }
        Command::Monthly => {
            let buckets = SummaryService::monthly_bookings(trips, &month_order(&config, &source));
            emit(out, args.json, &buckets, || renderer.monthly(&buckets))
        }
        Command::Revenue => {
            let revenue = SummaryService::revenue_by_charter_type(trips);
            emit(out, args.json, &revenue, || renderer.revenue(&revenue))
        }
        Command::Version | Command::Help => Ok(()),
    }
}

fn emit<T, F>(out: &mut dyn Write, json: bool, value: &T, text: F) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> String,
{
    if json {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", text())?;
    }
    Ok(())
}

fn load_config(args: &CliArgs) -> Result<Config, CliError> {
    let manager = match &args.config_path {
        Some(path) => ConfigManager::new(path.clone()),
        None => match ConfigManager::from_env() {
            Ok(manager) => manager,
            Err(err) => {
                tracing::warn!(error = %err, "config directory unavailable, using defaults");
                return Ok(Config::default());
            }
        },
    };
    Ok(manager.load()?)
}

/// Trips to report on and whether they came from the built-in sample.
struct TripSource {
    trips: Vec<Trip>,
    sample: bool,
}

fn load_trips(args: &CliArgs, config: &Config) -> Result<TripSource, CliError> {
    match args.trips_path.as_ref().or(config.trips_path.as_ref()) {
        Some(path) => Ok(TripSource {
            trips: load_trips_from_path(path)?,
            sample: false,
        }),
        None => {
            tracing::info!("no trip fixture configured, using built-in sample trips");
            Ok(TripSource {
                trips: sample_trips()?,
                sample: true,
            })
        }
    }
}

/// Configured order first, then the sample's own span, then the calendar year.
fn month_order<'a>(config: &'a Config, source: &TripSource) -> Vec<&'a str> {
    match config.month_order.as_deref() {
        Some(order) => order.iter().map(String::as_str).collect(),
        None if source.sample => SAMPLE_MONTH_ORDER.to_vec(),
        None => CALENDAR_MONTH_ORDER.to_vec(),
    }
}

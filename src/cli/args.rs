//! Command-line argument parsing for the report CLI.

use std::path::PathBuf;

use charter_core::CriteriaInput;

use crate::errors::CliError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    #[default]
    Overview,
    Trips,
    Weekly,
    Monthly,
    Revenue,
    Version,
    Help,
}

impl Command {
    fn parse(value: &str) -> Option<Self> {
        let command = match value {
            "overview" => Command::Overview,
            "trips" => Command::Trips,
            "weekly" => Command::Weekly,
            "monthly" => Command::Monthly,
            "revenue" => Command::Revenue,
            "version" => Command::Version,
            "help" => Command::Help,
            _ => return None,
        };
        Some(command)
    }
}

/// Parsed invocation of `charter_analytics_cli`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub command: Command,
    pub trips_path: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub today: Option<String>,
    pub criteria: CriteriaInput,
    pub json: bool,
    pub no_color: bool,
}

pub const USAGE: &str = "\
Usage: charter_analytics_cli [COMMAND] [OPTIONS]

Commands:
  overview   Booking counts per status and total revenue (default)
  trips      Trips table with status, narrowed by the filter options
  weekly     Bookings per day of the current Monday-first week
  monthly    Bookings per month, in the configured month order
  revenue    Revenue per charter type
  version    Build information
  help       Show this message

Options:
  --trips <FILE>          JSON trip fixture (defaults to config, then the built-in sample)
  --config <FILE>         Config file (defaults to $CHARTER_ANALYTICS_HOME/config.json)
  --today <YYYY-MM-DD>    Reference day instead of the system clock
  --status <STATUS>       Upcoming, Ongoing, Completed or All
  --charter-type <TYPE>   Exact charter type label or All
  --start <YYYY-MM-DD>    Range start; alone, selects exactly that day
  --end <YYYY-MM-DD>      Range end; alone, selects exactly that day
  --json                  Machine-readable output
  --no-color              Disable colored output";

pub fn parse_args<I, S>(args: I) -> Result<CliArgs, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut parsed = CliArgs::default();
    let mut command: Option<Command> = None;
    let mut iter = args.into_iter().map(Into::into);

    while let Some(arg) = iter.next() {
        if !arg.starts_with("--") {
            if command.is_some() {
                return Err(CliError::Input(format!("unexpected argument `{arg}`")));
            }
            command = Some(
                Command::parse(&arg)
                    .ok_or_else(|| CliError::Input(format!("unknown command `{arg}`")))?,
            );
            continue;
        }

        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
            None => (arg.clone(), None),
        };

        match flag.as_str() {
            "--json" => parsed.json = true,
            "--no-color" => parsed.no_color = true,
            "--help" => command = Some(Command::Help),
            _ => {
                let value = match inline {
                    Some(value) => value,
                    None => iter
                        .next()
                        .ok_or_else(|| CliError::Input(format!("`{flag}` expects a value")))?,
                };
                match flag.as_str() {
                    "--trips" => parsed.trips_path = Some(PathBuf::from(value)),
                    "--config" => parsed.config_path = Some(PathBuf::from(value)),
                    "--today" => parsed.today = Some(value),
                    "--status" => parsed.criteria.status = Some(value),
                    "--charter-type" => parsed.criteria.charter_type = Some(value),
                    "--start" => parsed.criteria.start_date = Some(value),
                    "--end" => parsed.criteria.end_date = Some(value),
                    _ => return Err(CliError::Input(format!("unknown option `{flag}`"))),
                }
            }
        }
    }

    parsed.command = command.unwrap_or_default();
    Ok(parsed)
}

use roadtrip_core::{TripReport, plan_trips, read_request};
use std::io::{BufRead, BufReader, Write};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "ROADTRIP_LOG";

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Roadtrip(roadtrip_core::Error),
    Json(serde_json::Error),
    DisconnectedMap,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Roadtrip(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::DisconnectedMap => write!(f, "Disconnected Map"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<roadtrip_core::Error> for CliError {
    fn from(value: roadtrip_core::Error) -> Self {
        match value {
            roadtrip_core::Error::DisconnectedMap => Self::DisconnectedMap,
            other => Self::Roadtrip(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    format: OutputFormat,
    pretty: bool,
    verbose: bool,
}

fn usage() -> &'static str {
    "roadtrip\n\
\n\
USAGE:\n\
  roadtrip [--format text|json] [--pretty] [--verbose] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - The input holds the locations, the road segments and the trips, in that order.\n\
  - Trips are only planned when every location can reach every other one;\n\
    otherwise 'Disconnected Map' is printed and the exit code is 3.\n\
  - Set ROADTRIP_LOG (e.g. ROADTRIP_LOG=debug) to control log output on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "--verbose" | "-v" => args.verbose = true,
            "--format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.format = fmt
                    .parse::<OutputFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn open_input(input: Option<&str>) -> Result<Box<dyn BufRead>, CliError> {
    match input {
        None | Some("-") => Ok(Box::new(BufReader::new(std::io::stdin().lock()))),
        Some(path) => Ok(Box::new(BufReader::new(std::fs::File::open(path)?))),
    }
}

fn write_reports(reports: &[TripReport], format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let mut out = std::io::stdout().lock();
    match format {
        OutputFormat::Text => {
            for report in reports {
                writeln!(out, "{report}")?;
            }
        }
        OutputFormat::Json => {
            if pretty {
                serde_json::to_writer_pretty(&mut out, reports)?;
            } else {
                serde_json::to_writer(&mut out, reports)?;
            }
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn run(args: &Args) -> Result<(), CliError> {
    let reader = open_input(args.input.as_deref())?;
    let request = read_request(reader)?;
    tracing::info!(
        locations = request.map.vertex_count(),
        segments = request.map.edge_count(),
        trips = request.trips.len(),
        "input loaded"
    );

    let reports = plan_trips(&request.map, &request.trips)?;
    write_reports(&reports, args.format, args.pretty)
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => {}
        Err(CliError::DisconnectedMap) => {
            tracing::warn!("road map is not strongly connected; no trips planned");
            println!("{}", CliError::DisconnectedMap);
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

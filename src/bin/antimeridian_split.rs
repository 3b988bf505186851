//! Command-line wrapper around [`antimeridian_split`]: reads a WKT polygon
//! or multipolygon from a file (or stdin), splits it across the
//! antimeridian if needed, and prints the result as WKT.

use antimeridian_split::error::WktError;
use antimeridian_split::{split_by_180, wkt};
use clap::Parser;
use std::fmt;
use std::io::{self, Read as _};
use std::path::PathBuf;

/// Rewrites a WKT polygon/multipolygon so no ring crosses the 180° meridian.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// WKT input file; reads from stdin when omitted.
    path: Option<PathBuf>,

    /// Increases log verbosity (`-v` for debug, `-vv` for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Unifies I/O and parse failures under one `Display` for the exit path.
enum CliError {
    Io(io::Error),
    Wkt(WktError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Wkt(err) => write!(f, "WKT parse error: {err}"),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<WktError> for CliError {
    fn from(err: WktError) -> Self {
        Self::Wkt(err)
    }
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();

    if let Err(err) = run(&args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let input = read_input(args.path.as_deref())?;

    log::debug!("read {} byte(s) of WKT input", input.len());
    let multipolygon = wkt::from_wkt(&input)?;

    log::debug!("parsed {} polygon(s)", multipolygon.polygons().len());
    let split = split_by_180(&multipolygon);

    println!("{}", wkt::to_wkt(&split));
    Ok(())
}

fn read_input(path: Option<&std::path::Path>) -> Result<String, CliError> {
    match path {
        Some(path) => {
            log::debug!("reading WKT from {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            log::debug!("reading WKT from stdin");
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

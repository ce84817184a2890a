//! Command-line argument parsing for the photosift binary.

use std::path::PathBuf;
use thiserror::Error;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Search the catalog and optionally classify one result
    Run(RunOptions),
}

/// Options for a search run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunOptions {
    pub catalog: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub query: String,
    /// First page to load.
    pub page: u32,
    /// How many times to advance to the next page after the first search.
    pub next: u32,
    /// Grid index of the photo to classify.
    pub select: Option<usize>,
}

/// Argument errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("{flag} requires a value")]
    MissingValue { flag: String },

    #[error("{flag} expects a number, got '{value}'")]
    InvalidNumber { flag: String, value: String },

    #[error("unknown argument '{arg}'")]
    Unknown { arg: String },

    #[error("--query is required")]
    MissingQuery,
}

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: photosift --query <text> [options]

Options:
  --catalog <path>   Photo catalog JSON (or PHOTOSIFT_CATALOG)
  --config <path>    Config file (default ~/.photosift/config.json)
  --query <text>     Search text
  --page <n>         First page to load (default 1)
  --next <n>         Advance this many pages after searching
  --select <i>       Classify the photo at grid index i
  -V, --version      Print version
  -h, --help         Print this help";

/// Parse command-line arguments. The first item is the program name.
///
/// ```
/// use photosift::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["photosift".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions {
        page: 1,
        ..RunOptions::default()
    };
    let mut query = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--catalog" => options.catalog = Some(PathBuf::from(value(&arg, args.next())?)),
            "--config" => options.config = Some(PathBuf::from(value(&arg, args.next())?)),
            "--query" => query = Some(value(&arg, args.next())?),
            "--page" => options.page = number(&arg, args.next())?,
            "--next" => options.next = number(&arg, args.next())?,
            "--select" => options.select = Some(number(&arg, args.next())?),
            _ => return Err(ArgsError::Unknown { arg }),
        }
    }

    options.query = query.ok_or(ArgsError::MissingQuery)?;
    Ok(CliCommand::Run(options))
}

fn value(flag: &str, next: Option<String>) -> Result<String, ArgsError> {
    next.ok_or_else(|| ArgsError::MissingValue {
        flag: flag.to_string(),
    })
}

fn number<T: std::str::FromStr>(flag: &str, next: Option<String>) -> Result<T, ArgsError> {
    let raw = value(flag, next)?;
    raw.parse().map_err(|_| ArgsError::InvalidNumber {
        flag: flag.to_string(),
        value: raw,
    })
}

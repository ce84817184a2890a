//! CLI module for the photosift binary.
//!
//! ```ignore
//! use photosift::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args())? {
//!     CliCommand::Run(options) => run(options).await?,
//!     other => print_info(other),
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, RunOptions, USAGE};
pub use version::{version_line, VERSION};

/// Text for informational commands; `None` for [`CliCommand::Run`].
pub fn info_text(command: &CliCommand) -> Option<String> {
    match command {
        CliCommand::Version => Some(version_line()),
        CliCommand::Help => Some(USAGE.to_string()),
        CliCommand::Run(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_has_no_info_text() {
        assert!(info_text(&CliCommand::Run(RunOptions::default())).is_none());
    }

    #[test]
    fn test_help_text_mentions_query() {
        assert!(info_text(&CliCommand::Help).unwrap().contains("--query"));
    }
}

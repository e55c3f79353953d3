//! CLI argument definitions for the converter.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pos-convert",
    version,
    about = "Convert a directory of NCR inventory exports into a ShopKeep import",
    long_about = "Convert a directory of NCR inventory snapshot CSV files into a single\n\
                  CSV for import into ShopKeep.\n\n\
                  Every *.csv file directly inside DIRECTORY is read in filename order.\n\
                  The ShopKeep import is written to standard output."
)]
pub struct Cli {
    /// Directory of NCR CSV files to convert.
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Include item names and vendors in trace logs.
    #[arg(long = "log-data")]
    pub log_data: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn directory_is_required() {
        assert!(Cli::try_parse_from(["pos-convert"]).is_err());
    }

    #[test]
    fn parses_directory_and_logging_flags() {
        let cli = Cli::try_parse_from([
            "pos-convert",
            "exports",
            "-vv",
            "--log-format",
            "json",
            "--log-data",
        ])
        .unwrap();
        assert_eq!(cli.directory, PathBuf::from("exports"));
        assert!(cli.verbosity.is_present());
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        assert!(cli.log_data);
        assert!(cli.log_level.is_none());
    }
}

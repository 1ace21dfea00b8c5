//! Command line configuration

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use jiff::Timestamp;

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Promodesk configuration
#[derive(Debug, Parser)]
#[command(
    name = "promodesk",
    about = "Discount and order views for a store admin",
    long_about = None
)]
pub struct Config {
    /// Logging settings
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Directory holding the YAML fixture sets
    #[arg(long, env = "PROMODESK_FIXTURES_DIR", default_value = "./fixtures")]
    pub fixtures_dir: PathBuf,

    /// Evaluate statuses at this RFC 3339 instant instead of the current time
    #[arg(long)]
    pub now: Option<Timestamp>,

    /// View to render
    #[command(subcommand)]
    pub command: Command,
}

/// Views the CLI can render
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the discount table
    Discounts {
        /// Fixture set to load promotions from
        #[arg(long, default_value = "default")]
        set: String,
    },

    /// Render the detail view of one order
    Order {
        /// Fixture set to load orders from
        #[arg(long, default_value = "default")]
        set: String,

        /// Fixture key of the order
        key: String,
    },
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Config::command().debug_assert();
    }

    #[test]
    fn parses_order_subcommand_with_clock_override() -> TestResult {
        let config = Config::try_parse_from([
            "promodesk",
            "--log-format",
            "json",
            "--fixtures-dir",
            "/tmp/fixtures",
            "--now",
            "2024-06-15T12:00:00Z",
            "order",
            "--set",
            "recent",
            "hoodie",
        ])?;
        let expected: Timestamp = "2024-06-15T12:00:00Z".parse()?;

        assert_eq!(config.logging.log_format, LogFormat::Json);
        assert_eq!(config.fixtures_dir, PathBuf::from("/tmp/fixtures"));
        assert_eq!(config.now, Some(expected));
        assert!(matches!(
            config.command,
            Command::Order { ref set, ref key } if set == "recent" && key == "hoodie"
        ));

        Ok(())
    }

    #[test]
    fn malformed_clock_override_is_rejected() {
        let result = Config::try_parse_from(["promodesk", "--now", "yesterday", "discounts"]);

        assert!(result.is_err());
    }
}

//! Promodesk CLI

use std::{io, process::ExitCode};

use jiff::Timestamp;
use thiserror::Error;
use tracing::{error, info};

use promodesk::{
    config::{Command, Config},
    fixtures::{Fixture, FixtureError},
    logging::init_subscriber,
    report::{DiscountTable, OrderReport, ReportError},
};

/// Errors that end a CLI run.
#[derive(Debug, Error)]
enum CliError {
    /// Fixture could not be loaded.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// Report could not be rendered.
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() -> ExitCode {
    // Load configuration from .env and CLI arguments
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            _ = err.print();

            return u8::try_from(err.exit_code()).map_or(ExitCode::FAILURE, ExitCode::from);
        }
    };

    if let Err(err) = init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for subscriber errors"
        )]
        {
            eprintln!("Logging error: {err}");
        }

        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "promodesk failed");

            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), CliError> {
    let now = config.now.unwrap_or_else(Timestamp::now);
    let mut fixture = Fixture::with_base_path(config.fixtures_dir.clone());

    match &config.command {
        Command::Discounts { set } => {
            fixture.load_promotions(set)?;

            let table = DiscountTable::new(fixture.promotions(), now)?;

            info!(%now, set = %set, row_count = table.rows().len(), "discount table");

            table.write_to(io::stdout().lock())?;
        }
        Command::Order { set, key } => {
            fixture.load_orders(set)?;

            let report = OrderReport::new(fixture.order(key)?)?;

            info!(set = %set, key = %key, "order report");

            report.write_to(io::stdout().lock())?;
        }
    }

    Ok(())
}

use countries_generator::cli::Cli;
use countries_generator::logger::init_logger;
use countries_generator::{Generator, GeneratorError};
use std::process::ExitCode;
use tracing::{error, warn};

fn main() -> ExitCode {
    let cli = Cli::from_cli(std::env::args_os());
    init_logger(cli.log_level.as_deref());

    match Generator::new(cli.into_config()).run() {
        Ok(report) => {
            if !report.warnings.is_empty() {
                warn!(
                    warnings = report.warnings.len(),
                    "Reference cross-check finished with warnings"
                );
            }
            ExitCode::SUCCESS
        }
        Err(GeneratorError::Validation(err)) => {
            error!("{err}");
            error!("Output not written, fix the country list and rerun");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

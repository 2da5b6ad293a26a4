//! Command line arguments.

use crate::config::{DEFAULT_INPUT, DEFAULT_OUTPUT, GeneratorConfig};
use crate::emit::java::{DEFAULT_CLASS_NAME, DEFAULT_PACKAGE};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Generate the dial code to country lookup class from a country list.
#[derive(Debug, Clone, Parser)]
#[command(name = "countries-generator", version, about)]
pub struct Cli {
    /// JSON country list to read
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// File to write the generated class to
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Package of the generated class
    #[arg(long, default_value = DEFAULT_PACKAGE)]
    pub package: String,

    /// Name of the generated class
    #[arg(long, default_value = DEFAULT_CLASS_NAME)]
    pub class_name: String,

    /// Validate the country list without writing the output file
    #[arg(long)]
    pub check: bool,

    /// Warn about countries that disagree with ISO 3166 reference data
    #[arg(long)]
    pub cross_check: bool,

    /// Log filter, e.g. "debug" or "countries_generator=trace".
    /// Falls back to RUST_LOG, then "info"
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Parse arguments, exiting with usage on error.
    #[must_use]
    pub fn from_cli<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::parse_from(args)
    }

    /// Turn the arguments into a generator configuration.
    pub fn into_config(self) -> GeneratorConfig {
        GeneratorConfig::builder()
            .input(self.input)
            .output(self.output)
            .package(self.package)
            .class_name(self.class_name)
            .check_only(self.check)
            .cross_check(self.cross_check)
            .build()
    }
}

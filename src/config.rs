//! Generator configuration types.

use crate::emit::java::{DEFAULT_CLASS_NAME, DEFAULT_PACKAGE};
use std::path::PathBuf;

/// Default location of the country list.
pub const DEFAULT_INPUT: &str = "countries.json";

/// Default location of the generated class.
pub const DEFAULT_OUTPUT: &str = "Countries.java";

/// Configuration for a generator run.
///
/// The defaults read `countries.json` and write `Countries.java` in the
/// current directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Path of the JSON country list.
    pub input: PathBuf,
    /// Path of the generated file.
    pub output: PathBuf,
    /// Package of the generated class.
    pub package: String,
    /// Name of the generated class.
    pub class_name: String,
    /// Validate and render without writing the output file.
    pub check_only: bool,
    /// Compare the country list with ISO 3166 reference data.
    pub cross_check: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            package: DEFAULT_PACKAGE.to_string(),
            class_name: DEFAULT_CLASS_NAME.to_string(),
            check_only: false,
            cross_check: false,
        }
    }
}

impl GeneratorConfig {
    /// Create a new builder for GeneratorConfig.
    ///
    /// # Example
    ///
    /// ```rust
    /// use countries_generator::GeneratorConfig;
    /// use std::path::Path;
    ///
    /// let config = GeneratorConfig::builder()
    ///     .input("data/countries.json")
    ///     .output("gen/Countries.java")
    ///     .check_only(true)
    ///     .build();
    ///
    /// assert_eq!(config.input, Path::new("data/countries.json"));
    /// assert!(config.check_only);
    /// ```
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Create a new config reading from a different input path.
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Create a new config writing to a different output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

/// Builder for GeneratorConfig.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the path of the country list.
    ///
    /// Default: `countries.json`
    pub fn input(mut self, input: impl Into<PathBuf>) -> Self {
        self.config.input = input.into();
        self
    }

    /// Set the path of the generated file.
    ///
    /// Default: `Countries.java`
    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.config.output = output.into();
        self
    }

    /// Set the package of the generated class.
    ///
    /// Default: `com.github.ialokim.phonefield`
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.config.package = package.into();
        self
    }

    /// Set the name of the generated class.
    ///
    /// Default: `Countries`
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.config.class_name = class_name.into();
        self
    }

    /// Only validate and render, never write.
    pub fn check_only(mut self, check_only: bool) -> Self {
        self.config.check_only = check_only;
        self
    }

    /// Enable the reference data cross-check.
    pub fn cross_check(mut self, cross_check: bool) -> Self {
        self.config.cross_check = cross_check;
        self
    }

    /// Build the GeneratorConfig.
    pub fn build(self) -> GeneratorConfig {
        self.config
    }
}

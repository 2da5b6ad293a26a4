//! One generator run: load, group, render, write.

use crate::config::GeneratorConfig;
use crate::emit::{Emitter, JavaEmitter};
use crate::errors::GeneratorError;
use crate::grouping::group_and_validate;
use crate::input::load_countries;
use crate::reference::{ReferenceWarning, cross_check};
use crate::types::Country;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[cfg(feature = "tracing")]
use tracing::info;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Number of distinct dial codes in the table.
    pub dial_codes: usize,
    /// Number of countries in the table.
    pub countries: usize,
    /// Reference data warnings, empty unless the cross-check is enabled.
    pub warnings: Vec<ReferenceWarning>,
    /// Path written to, `None` in check-only mode.
    pub written: Option<PathBuf>,
    /// Size of the rendered output in bytes.
    pub bytes: usize,
}

/// Rendered output together with the counts reported for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Full text of the output file.
    pub text: String,
    /// Number of distinct dial codes.
    pub dial_codes: usize,
    /// Number of countries.
    pub countries: usize,
}

/// Generates the lookup table file from a country list.
///
/// Generation is all-or-nothing: the output file is only replaced once
/// the whole list has been validated and rendered.
///
/// # Example
///
/// ```rust,no_run
/// use countries_generator::{Generator, GeneratorConfig};
///
/// let config = GeneratorConfig::default()
///     .with_input("raw/countries.json")
///     .with_output("src/main/java/Countries.java");
///
/// let report = Generator::new(config).run()?;
/// println!("{} dial codes written", report.dial_codes);
/// # Ok::<(), countries_generator::GeneratorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Generator<E = JavaEmitter> {
    config: GeneratorConfig,
    emitter: E,
}

impl Generator<JavaEmitter> {
    /// Create a generator rendering Java with the configured names.
    pub fn new(config: GeneratorConfig) -> Self {
        let emitter = JavaEmitter::new()
            .with_package(config.package.clone())
            .with_class_name(config.class_name.clone());
        Self { config, emitter }
    }
}

impl<E: Emitter> Generator<E> {
    /// Create a generator with a custom emitter.
    ///
    /// The package and class name of `config` are not used.
    pub fn with_emitter(config: GeneratorConfig, emitter: E) -> Self {
        Self { config, emitter }
    }

    /// The configuration of this generator.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Group, validate and render a country list without touching disk.
    pub fn render(&self, countries: Vec<Country>) -> Result<Rendered, GeneratorError> {
        let groups = group_and_validate(countries)?;
        let text = self.emitter.emit(&groups)?;
        Ok(Rendered {
            text,
            dial_codes: groups.len(),
            countries: groups.country_count(),
        })
    }

    /// Run the full pipeline described by the configuration.
    pub fn run(&self) -> Result<GenerationReport, GeneratorError> {
        let countries = load_countries(&self.config.input)?;

        let warnings = if self.config.cross_check {
            cross_check(&countries)
        } else {
            Vec::new()
        };

        let rendered = self.render(countries)?;

        let written = if self.config.check_only {
            #[cfg(feature = "tracing")]
            info!(
                dial_codes = rendered.dial_codes,
                "Country list is valid, output not written"
            );
            None
        } else {
            write_replacing(&self.config.output, &rendered.text)?;
            #[cfg(feature = "tracing")]
            info!(
                path = %self.config.output.display(),
                dial_codes = rendered.dial_codes,
                countries = rendered.countries,
                bytes = rendered.text.len(),
                "Generated country table"
            );
            Some(self.config.output.clone())
        };

        Ok(GenerationReport {
            dial_codes: rendered.dial_codes,
            countries: rendered.countries,
            warnings,
            written,
            bytes: rendered.text.len(),
        })
    }
}

/// Write `contents` to a uniquely named temporary file next to `path` and
/// persist it over `path`, so `path` never holds a partial file. The
/// temporary file is removed if anything fails before the rename.
fn write_replacing(path: &Path, contents: &str) -> Result<(), GeneratorError> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let io_err = |source: std::io::Error| GeneratorError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(contents.as_bytes()).map_err(io_err)?;
    tmp.flush().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

//! # Countries Generator
//!
//! Generates the lookup table that maps a dial code to the countries
//! sharing it, for phone number input fields.
//!
//! The country list is grouped by dial code. Every dial code shared by
//! several countries needs exactly one priority country, the fallback used
//! when no area code matches. It is placed last in its group, so a lookup
//! scanning the group front to back checks every area code first.
//!
//! ## Quick Start
//!
//! ```rust
//! use countries_generator::{input::parse_countries, group_and_validate, Emitter, JavaEmitter};
//!
//! let countries = parse_countries(r#"[
//!     {"iso2": "us", "dialCode": 1, "priority": 1, "areaCodes": null},
//!     {"iso2": "ca", "dialCode": 1, "priority": 0, "areaCodes": ["204"]},
//!     {"iso2": "de", "dialCode": 49, "priority": 0, "areaCodes": null}
//! ]"#)?;
//!
//! let groups = group_and_validate(countries)?;
//! let source = JavaEmitter::new().emit(&groups)?;
//! assert!(source.contains("COUNTRIES.put(49,"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! countries.json
//!         │  input::load_countries
//!         ▼
//!   Vec<Country>
//!         │  group_and_validate
//!         ▼
//!  DialCodeGroups        (or GroupingError with every invalid dial code)
//!         │  Emitter
//!         ▼
//!  Countries.java
//! ```
//!
//! ## Features
//!
//! - `tracing` - diagnostics through the `tracing` crate (enabled by default)
//! - `cli` - the `countries-generator` binary (enabled by default)

pub mod config;
pub mod emit;
pub mod errors;
pub mod generator;
pub mod grouping;
pub mod input;
pub mod reference;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod logger;

// Re-export commonly used types at the crate root
pub use config::{GeneratorConfig, GeneratorConfigBuilder};
pub use emit::{Emitter, JavaEmitter};
pub use errors::{EmitError, GeneratorError, GroupValidationError, GroupingError};
pub use generator::{GenerationReport, Generator, Rendered};
pub use grouping::{DialCodeGroups, group_and_validate};
pub use reference::{ReferenceWarning, cross_check};
pub use types::{AreaCode, AreaCodeError, Country, DialCode, DialCodeError, Iso2, Iso2Error};

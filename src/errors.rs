//! Error types for grouping, emitting and generating the country table.

use crate::types::DialCode;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A dial code group that breaks the priority rule.
///
/// Every dial code shared by more than one country needs exactly one
/// country with priority 1, which becomes the fallback match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupValidationError {
    /// No member of a shared dial code has priority 1.
    #[error("No country with priority 1 for +{dial_code}")]
    MissingPriority { dial_code: DialCode },

    /// More than one member of a shared dial code has priority 1.
    #[error("Two countries with priority 1 for +{dial_code}")]
    DuplicatePriority { dial_code: DialCode },
}

impl GroupValidationError {
    /// The dial code whose group is invalid.
    pub fn dial_code(&self) -> DialCode {
        match self {
            GroupValidationError::MissingPriority { dial_code }
            | GroupValidationError::DuplicatePriority { dial_code } => *dial_code,
        }
    }
}

/// Every validation error found in a single grouping pass.
///
/// Errors are ordered by dial code. The list is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} invalid dial code group(s): {}", .errors.len(), join_errors(.errors))]
pub struct GroupingError {
    errors: Vec<GroupValidationError>,
}

impl GroupingError {
    pub(crate) fn new(errors: Vec<GroupValidationError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self { errors }
    }

    /// All validation errors, ordered by dial code.
    pub fn errors(&self) -> &[GroupValidationError] {
        &self.errors
    }

    /// Consume the aggregate and return the individual errors.
    pub fn into_errors(self) -> Vec<GroupValidationError> {
        self.errors
    }
}

fn join_errors(errors: &[GroupValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors raised while rendering the grouped table.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The package name is not a dotted sequence of Java identifiers.
    #[error("Invalid package name '{0}'")]
    InvalidPackage(String),

    /// The class name is not a Java identifier.
    #[error("Invalid class name '{0}'")]
    InvalidClassName(String),

    /// Writing into the output buffer failed.
    #[error("Failed to render output: {0}")]
    Format(#[from] fmt::Error),
}

/// Top-level error of a generator run.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Reading the input or writing the output failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The country list could not be parsed.
    #[error("Invalid country list {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The country list breaks the priority rule.
    #[error(transparent)]
    Validation(#[from] GroupingError),

    /// The table could not be rendered.
    #[error(transparent)]
    Emit(#[from] EmitError),
}

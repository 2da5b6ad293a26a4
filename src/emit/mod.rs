//! Rendering of the grouped country table.

pub mod java;

use crate::errors::EmitError;
use crate::grouping::DialCodeGroups;

pub use java::JavaEmitter;

/// Renders validated dial code groups into a target representation.
///
/// Implementations must keep the group order given by
/// [`DialCodeGroups::iter`] and the country order within each group.
///
/// # Example
///
/// ```rust
/// use countries_generator::{DialCodeGroups, EmitError, Emitter};
///
/// struct Summary;
///
/// impl Emitter for Summary {
///     fn emit(&self, groups: &DialCodeGroups) -> Result<String, EmitError> {
///         Ok(format!("{} dial codes", groups.len()))
///     }
/// }
///
/// let text = Summary.emit(&DialCodeGroups::default()).unwrap();
/// assert_eq!(text, "0 dial codes");
/// ```
pub trait Emitter {
    /// Render the groups into the full text of the output file.
    fn emit(&self, groups: &DialCodeGroups) -> Result<String, EmitError>;
}

use thiserror::Error;

use crate::modification::PlacementError;

/// Result type for fallible operations of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// A rejected operation.
///
/// Every variant describes invalid input; the state the operation would have mutated is left
/// untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A drag gesture was started while another one is still in progress.
    #[error("a shape is already being drawn")]
    AlreadyDrawing,

    /// The configuration holds values the engine cannot work with.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A modification cannot be placed on the edge.
    #[error(transparent)]
    Placement(#[from] PlacementError),

    /// A modification does not fit the edge it is placed on.
    #[error("invalid modification: {0}")]
    InvalidModification(String),
}

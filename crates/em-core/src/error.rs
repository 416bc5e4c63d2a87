//! Error types used throughout the crate.

use crate::world::LocationId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when constructing or manipulating a world.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A location with the same name already exists.
    #[error("location already exists: \"{0}\"")]
    DuplicateLocation(String),

    /// The requested location ID does not exist in the world.
    #[error("location not found: {0}")]
    LocationNotFound(LocationId),

    /// An exit with the same keyword already leaves this location.
    #[error("exit \"{key}\" already exists from {location}")]
    DuplicateExit {
        /// The location the edge leaves from.
        location: String,
        /// The conflicting edge keyword.
        key: String,
    },

    /// The location already has an occupying trial.
    #[error("chamber \"{0}\" is already occupied by a judge")]
    ChamberOccupied(String),

    /// A trial was created with no questions to ask.
    #[error("trial for judge \"{0}\" has no questions")]
    EmptyTrial(String),
}

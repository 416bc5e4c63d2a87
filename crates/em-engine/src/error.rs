//! Error types for the engine.
//!
//! Unrecognized input is the only condition surfaced as a typed error; the
//! host loop renders it as corrective text. Every other recoverable
//! condition (preconditions, absent items, blocked exits) resolves within
//! the turn as a narrative response and never reaches this type.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors the interpreter can surface to the host loop.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The first word did not resolve to any known verb.
    #[error("I don't understand \"{0}\". Type 'help' for a list of commands.")]
    UnknownCommand(String),

    /// The phrase after the verb did not resolve to any known noun.
    #[error("I don't know what \"{0}\" is.")]
    UnknownNoun(String),

    /// The verb requires a noun and none was given.
    #[error("{0} what?")]
    MissingNoun(&'static str),

    /// World construction or lookup failure.
    #[error(transparent)]
    Core(#[from] em_core::CoreError),
}

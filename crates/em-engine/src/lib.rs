//! Interaction engine for Earth Messenger.
//!
//! Provides the command interpreter that turns one line of free-text input
//! into a response and a set of state mutations: vocabulary resolution
//! (verb and noun tables), dispatch against the current location's special
//! commands, answer routing into an active trial, and the aggregate
//! win/lose computation the host loop polls after each turn.

/// Error types for the engine.
pub mod error;
/// Aggregate game outcome computed from trial state.
pub mod outcome;
/// The game session: command interpretation and state mutation.
pub mod session;
/// Verb and noun vocabularies.
pub mod vocab;

pub use error::{EngineError, EngineResult};
pub use outcome::GameStatus;
pub use session::GameSession;
pub use vocab::{Direction, Noun, Verb};

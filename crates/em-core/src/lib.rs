//! Core types for Earth Messenger: the world graph, items, questions,
//! trials, and player state.
//!
//! This crate defines the data model that the interaction engine operates
//! on. It is independent of any parsing or I/O — a [`World`] is constructed
//! programmatically by a content provider and mutated turn by turn through
//! the engine.

/// Error types used throughout the crate.
pub mod error;
/// Items, their variant kinds, and usage effects.
pub mod item;
/// Location nodes: descriptions, edges, special commands, occupancy.
pub mod location;
/// Player state: inventory, vitals, current location.
pub mod player;
/// Questions asked during a trial.
pub mod question;
/// The per-judge trial state machine.
pub mod trial;
/// Bounded vitals (satiety, hydration).
pub mod vital;
/// The world graph that owns all locations.
pub mod world;

pub use error::{CoreError, CoreResult};
pub use item::{Item, ItemKind, UseEffect};
pub use location::{Location, SpecialAction};
pub use player::PlayerState;
pub use question::Question;
pub use trial::{Trial, TrialPhase, Verdict};
pub use vital::Vital;
pub use world::{LocationId, World};

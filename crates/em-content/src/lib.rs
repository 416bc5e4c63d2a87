//! Authored content for Earth Messenger.
//!
//! Everything story-specific lives here: the five-location world, the
//! three judges and their question sequences, the items aboard the ship,
//! and the framing prose. The engine crates stay story-agnostic; this
//! crate is the only place that knows who Zyx is.

/// Narrative prose: intro, outro, and the mission briefing.
pub mod text;
/// Construction of the fixed game world.
pub mod world;

pub use text::{INTRO, MISSION_BRIEFING, outro};
pub use world::build_world;

//! Player state: inventory, vitals, current location.
//!
//! The current location is an explicit field here, passed by reference
//! into whatever needs it — no process-wide shared state. Items move
//! between a location and the inventory on pickup; no two containers ever
//! hold the same item.

use crate::item::{Item, UseEffect};
use crate::vital::Vital;
use crate::world::LocationId;

/// Maximum value for each vital.
pub const VITAL_MAX: i32 = 5;

/// The traveler's mutable state for one session.
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// The player's name.
    pub name: String,
    /// Carried items, in pickup order.
    pub inventory: Vec<Item>,
    /// Hunger vital; full means fed.
    pub satiety: Vital,
    /// Thirst vital; full means quenched.
    pub hydration: Vital,
    /// The location the player currently occupies.
    pub location: LocationId,
    /// Set once the recorded mission message has been heard.
    pub heard_message: bool,
}

impl PlayerState {
    /// Create a player at a starting location with empty vitals.
    pub fn new(name: impl Into<String>, location: LocationId) -> Self {
        Self {
            name: name.into(),
            inventory: Vec::new(),
            satiety: Vital::new(VITAL_MAX),
            hydration: Vital::new(VITAL_MAX),
            location,
            heard_message: false,
        }
    }

    /// Use the inventory item at `index` and absorb its effect.
    ///
    /// The index must come from a prior inventory lookup this turn.
    pub fn use_at(&mut self, index: usize) -> String {
        let effect = self.inventory[index].apply();
        self.absorb(effect)
    }

    /// Apply a use effect to vitals and flags, returning its response text.
    pub fn absorb(&mut self, effect: UseEffect) -> String {
        self.satiety.adjust(effect.satiety);
        self.hydration.adjust(effect.hydration);
        if effect.heard_message {
            self.heard_message = true;
        }
        effect.response
    }
}

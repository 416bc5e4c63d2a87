//! Location nodes: descriptions, edges, special commands, occupancy.
//!
//! Edge keys and special-command keywords are case-folded on insertion and
//! lookup. A special command matches the entire raw input, which lets a
//! single room override generic verb parsing ("open door" is not a
//! verb+noun pair). At most one trial occupies a location.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::item::Item;
use crate::trial::Trial;
use crate::world::LocationId;

/// Canonical tags for location-specific special commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialAction {
    /// Try to unlock the exit door (requires full vitals and the message).
    UnlockDoor,
    /// Open the storage compartments, revealing stowed items.
    OpenCompartments,
    /// Thaw a frozen meal from the inventory.
    MicrowaveMeal,
    /// Eat a meal from the inventory.
    EatMeal,
    /// Drink from a water bottle in the inventory.
    DrinkWater,
    /// Examine the ship systems.
    CheckSystems,
}

/// A node in the world graph the player can occupy.
#[derive(Debug, Clone)]
pub struct Location {
    /// Location name.
    pub name: String,
    /// One-line description shown on re-entry.
    pub short_desc: String,
    /// Full description shown on first entry and on `look`.
    pub long_desc: String,
    /// Items currently owned by this location.
    pub items: Vec<Item>,
    /// The occupying trial, if this is a judged chamber.
    pub trial: Option<Trial>,
    /// Whether the player has entered this location before.
    pub visited: bool,
    /// Whether hidden storage here has been searched open.
    pub searched: bool,
    /// Whether the occupying trial was passed.
    pub passed: bool,
    /// Whether this location's gate is done: a passed-or-failed trial, or
    /// an unlocked door.
    pub completed: bool,
    exits: HashMap<String, LocationId>,
    specials: HashMap<String, SpecialAction>,
}

impl Location {
    /// Create a location with its two descriptions.
    pub fn new(
        name: impl Into<String>,
        short_desc: impl Into<String>,
        long_desc: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            short_desc: short_desc.into(),
            long_desc: long_desc.into(),
            items: Vec::new(),
            trial: None,
            visited: false,
            searched: false,
            passed: false,
            completed: false,
            exits: HashMap::new(),
            specials: HashMap::new(),
        }
    }

    /// Add an item to this location.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Register a special command keyword for this location.
    pub fn with_special(mut self, keyword: &str, action: SpecialAction) -> Self {
        self.specials.insert(keyword.to_lowercase(), action);
        self
    }

    /// Bind a trial to this location. At most one trial may occupy it.
    pub fn set_trial(&mut self, trial: Trial) -> CoreResult<()> {
        if self.trial.is_some() {
            return Err(CoreError::ChamberOccupied(self.name.clone()));
        }
        self.trial = Some(trial);
        Ok(())
    }

    /// Look up an outward edge by keyword (case-folded).
    pub fn exit_to(&self, key: &str) -> Option<LocationId> {
        self.exits.get(&key.to_lowercase()).copied()
    }

    /// Resolve raw input against this location's special-command table.
    /// The input must already be trimmed and lowercased.
    pub fn special_command(&self, raw: &str) -> Option<SpecialAction> {
        self.specials.get(raw).copied()
    }

    /// Whether any keyword here maps to the given special action.
    pub fn has_special(&self, action: SpecialAction) -> bool {
        self.specials.values().any(|a| *a == action)
    }

    /// The special-command keywords available here, sorted.
    pub fn special_keywords(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.specials.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// The outward edge keywords, sorted.
    pub fn exit_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.exits.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Whether an item here can currently be taken. Stowed items become
    /// available once the location has been searched.
    pub fn is_available(&self, item: &Item) -> bool {
        self.searched || !item.stowed
    }

    pub(crate) fn add_exit(&mut self, key: &str, target: LocationId) -> CoreResult<()> {
        let key = key.to_lowercase();
        if self.exits.contains_key(&key) {
            return Err(CoreError::DuplicateExit {
                location: self.name.clone(),
                key,
            });
        }
        self.exits.insert(key, target);
        Ok(())
    }
}

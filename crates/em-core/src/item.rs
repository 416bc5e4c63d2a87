//! Items, their variant kinds, and usage effects.
//!
//! Instead of a subtype per item, a single [`Item`] record carries an
//! [`ItemKind`] tag and one dispatch method, [`Item::apply`]. Applying an
//! item returns a [`UseEffect`] describing the state changes; the player
//! state is responsible for absorbing the effect. Using an item that has
//! already been consumed fails softly: the effect is empty apart from an
//! explanatory response.

use serde::{Deserialize, Serialize};

/// The behavioral variant of an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ItemKind {
    /// A single-use consumable that restores vitals.
    Consumable {
        /// Satiety restored on use.
        satiety: i32,
        /// Hydration restored on use.
        hydration: i32,
        /// Whether the consumable has been used up.
        consumed: bool,
        /// Response shown on successful use.
        use_text: String,
        /// Response shown when the consumable is already gone.
        spent_text: String,
    },
    /// A meal that starts frozen and must be thawed before it can be eaten.
    FrozenMeal {
        /// Satiety restored on eating.
        satiety: i32,
        /// Whether the meal is still frozen.
        frozen: bool,
        /// Whether the meal has been eaten.
        eaten: bool,
    },
    /// A device carrying a recorded message. Replayable; marks the message
    /// as heard on the player.
    MessageDevice {
        /// The recorded message text.
        transcript: String,
    },
}

/// The result of applying an item: vital deltas, a message-heard flag, and
/// the response text to show the player.
#[derive(Debug, Clone)]
pub struct UseEffect {
    /// Satiety delta to apply.
    pub satiety: i32,
    /// Hydration delta to apply.
    pub hydration: i32,
    /// Whether the mission message was heard.
    pub heard_message: bool,
    /// Player-facing response text.
    pub response: String,
}

impl UseEffect {
    /// An effect with no state change, only a response.
    pub fn nothing(response: impl Into<String>) -> Self {
        Self {
            satiety: 0,
            hydration: 0,
            heard_message: false,
            response: response.into(),
        }
    }
}

/// An object the player can pick up and use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Item name, matched against noun spellings.
    pub name: String,
    /// Short display text.
    pub description: String,
    /// Stowed items are hidden until their location has been searched.
    pub stowed: bool,
    kind: ItemKind,
}

impl Item {
    /// Create a single-use consumable.
    pub fn consumable(
        name: impl Into<String>,
        description: impl Into<String>,
        satiety: i32,
        hydration: i32,
        use_text: impl Into<String>,
        spent_text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            stowed: false,
            kind: ItemKind::Consumable {
                satiety,
                hydration,
                consumed: false,
                use_text: use_text.into(),
                spent_text: spent_text.into(),
            },
        }
    }

    /// Create a frozen meal. It must be thawed before it can be eaten.
    pub fn frozen_meal(
        name: impl Into<String>,
        description: impl Into<String>,
        satiety: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            stowed: false,
            kind: ItemKind::FrozenMeal {
                satiety,
                frozen: true,
                eaten: false,
            },
        }
    }

    /// Create a message-playing device.
    pub fn message_device(
        name: impl Into<String>,
        description: impl Into<String>,
        transcript: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            stowed: false,
            kind: ItemKind::MessageDevice {
                transcript: transcript.into(),
            },
        }
    }

    /// Mark the item as stowed (hidden until its location is searched).
    pub fn stowed(mut self) -> Self {
        self.stowed = true;
        self
    }

    /// Whether this item is a meal (frozen or thawed).
    pub fn is_meal(&self) -> bool {
        matches!(self.kind, ItemKind::FrozenMeal { .. })
    }

    /// Whether this item is a drinkable consumable.
    pub fn is_drink(&self) -> bool {
        matches!(self.kind, ItemKind::Consumable { hydration, .. } if hydration > 0)
    }

    /// Whether this item is currently frozen.
    pub fn is_frozen(&self) -> bool {
        matches!(self.kind, ItemKind::FrozenMeal { frozen: true, .. })
    }

    /// Thaw a frozen meal. Returns true if the state changed.
    pub fn thaw(&mut self) -> bool {
        match &mut self.kind {
            ItemKind::FrozenMeal { frozen, .. } if *frozen => {
                *frozen = false;
                true
            }
            _ => false,
        }
    }

    /// Use the item, dispatching on its kind.
    pub fn apply(&mut self) -> UseEffect {
        match &mut self.kind {
            ItemKind::Consumable {
                consumed: true,
                spent_text,
                ..
            } => UseEffect::nothing(spent_text.clone()),
            ItemKind::Consumable {
                satiety,
                hydration,
                consumed,
                use_text,
                ..
            } => {
                *consumed = true;
                UseEffect {
                    satiety: *satiety,
                    hydration: *hydration,
                    heard_message: false,
                    response: use_text.clone(),
                }
            }
            ItemKind::FrozenMeal { eaten: true, .. } => {
                UseEffect::nothing(format!("The {} is already gone.", self.name))
            }
            ItemKind::FrozenMeal { frozen: true, .. } => UseEffect::nothing(format!(
                "The {} is frozen solid. Maybe you should microwave it first.",
                self.name
            )),
            ItemKind::FrozenMeal { satiety, eaten, .. } => {
                *eaten = true;
                UseEffect {
                    satiety: *satiety,
                    hydration: 0,
                    heard_message: false,
                    response: format!(
                        "You eat the warm {}. You immediately feel stronger.",
                        self.name
                    ),
                }
            }
            ItemKind::MessageDevice { transcript } => UseEffect {
                satiety: 0,
                hydration: 0,
                heard_message: true,
                response: transcript.clone(),
            },
        }
    }
}

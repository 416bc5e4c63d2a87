//! Verb and noun vocabularies.
//!
//! Both tables are closed enumerations with fixed accepted spellings.
//! Resolution is case-insensitive exact match; anything unlisted resolves
//! to `None` and the interpreter reports it, never defaults.

use em_core::Item;

/// Direction for movement commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
}

impl Direction {
    /// Parse a direction from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            _ => None,
        }
    }

    /// The canonical edge keyword for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

/// A canonical action resolved from a verb token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Move in a compass direction.
    Move,
    /// Leave through the current location's way out.
    Exit,
    /// Pick up an item.
    Take,
    /// Use a carried item.
    Use,
    /// Examine the surroundings.
    Look,
    /// List carried items.
    Inventory,
    /// Address the judge present here.
    Greet,
    /// Start the trial of the judge present here.
    Start,
    /// Answer a pending question explicitly.
    Answer,
    /// Show the command reference.
    Help,
}

impl Verb {
    /// Resolve a verb token to its canonical action.
    pub fn resolve(token: &str) -> Option<Self> {
        match token {
            "go" | "move" | "enter" => Some(Self::Move),
            "exit" => Some(Self::Exit),
            "take" | "get" => Some(Self::Take),
            "use" => Some(Self::Use),
            "look" | "examine" => Some(Self::Look),
            "inventory" | "i" => Some(Self::Inventory),
            "greet" | "talk" => Some(Self::Greet),
            "start" => Some(Self::Start),
            "answer" => Some(Self::Answer),
            "help" => Some(Self::Help),
            _ => None,
        }
    }

    /// The word used when asking for a missing noun ("take what?").
    pub fn word(&self) -> &'static str {
        match self {
            Self::Move => "go",
            Self::Exit => "exit",
            Self::Take => "take",
            Self::Use => "use",
            Self::Look => "look",
            Self::Inventory => "inventory",
            Self::Greet => "greet",
            Self::Start => "start",
            Self::Answer => "answer",
            Self::Help => "help",
        }
    }
}

/// A canonical game object resolved from a noun phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Noun {
    /// A compass direction.
    Compass(Direction),
    /// The frozen pizza.
    Pizza,
    /// The message phone.
    Phone,
    /// The water bottle.
    WaterBottle,
}

impl Noun {
    /// Accepted spellings for each concrete item noun.
    fn spellings(&self) -> &'static [&'static str] {
        match self {
            Self::Compass(_) => &[],
            Self::Pizza => &["pizza"],
            Self::Phone => &["iphone", "phone"],
            Self::WaterBottle => &["water bottle", "water"],
        }
    }

    /// The primary spelling, used in responses.
    pub fn phrase(&self) -> &'static str {
        match self {
            Self::Compass(d) => d.name(),
            Self::Pizza => "pizza",
            Self::Phone => "iphone",
            Self::WaterBottle => "water bottle",
        }
    }

    /// Resolve a noun phrase. Case-insensitive, whitespace-trimmed.
    pub fn resolve(phrase: &str) -> Option<Self> {
        let clean = phrase.trim().to_lowercase();
        if let Some(dir) = Direction::parse(&clean) {
            return Some(Self::Compass(dir));
        }
        [Self::Pizza, Self::Phone, Self::WaterBottle]
            .into_iter()
            .find(|noun| noun.spellings().contains(&clean.as_str()))
    }

    /// Whether this noun names the given concrete item.
    pub fn matches_item(&self, item: &Item) -> bool {
        self.spellings()
            .iter()
            .any(|s| item.name.eq_ignore_ascii_case(s))
    }
}

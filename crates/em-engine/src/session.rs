//! Game session management.
//!
//! One [`GameSession`] owns the world and the player for a single
//! playthrough. [`GameSession::process`] turns one line of raw input into
//! a response string, mutating state as a side effect. Dispatch order,
//! first match wins:
//!
//! 1. the current location's special-command table (whole-line match);
//! 2. a pending question at the current location (the line is the answer);
//! 3. a bare compass direction;
//! 4. verb token plus noun phrase.
//!
//! Preconditions that fail (locked doors, sealed chambers, absent items)
//! resolve inside the turn as narrative text, not as errors.

use em_core::{
    Item, Location, LocationId, PlayerState, SpecialAction, Trial, TrialPhase, World,
};

use crate::error::{EngineError, EngineResult};
use crate::outcome::GameStatus;
use crate::vocab::{Direction, Noun, Verb};

/// A single-player game session.
pub struct GameSession {
    /// The world being explored.
    world: World,
    /// The player's current state.
    player: PlayerState,
}

impl GameSession {
    /// Create a session with the player at the world's starting location.
    pub fn new(world: World, player_name: impl Into<String>) -> EngineResult<Self> {
        let start = world.start()?;
        let player = PlayerState::new(player_name, start);
        Ok(Self { world, player })
    }

    /// Get the current world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Derive the aggregate standing across all trials.
    pub fn status(&self) -> GameStatus {
        GameStatus::compute(&self.world)
    }

    /// First look at the starting location. Marks it visited.
    pub fn opening(&mut self) -> String {
        self.arrive(self.player.location)
    }

    /// Process one line of player input and return the response.
    pub fn process(&mut self, input: &str) -> EngineResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok("Please enter a command.".to_string());
        }
        let lower = trimmed.to_lowercase();

        if let Some(action) = self.current().special_command(&lower) {
            return Ok(self.handle_special(action));
        }

        if self.pending_question() {
            // The whole line is the answer; a leading "answer" verb is
            // tolerated and stripped.
            let answer = lower.strip_prefix("answer ").unwrap_or(&lower);
            return Ok(self.submit_answer(answer));
        }

        if let Some(dir) = Direction::parse(&lower) {
            return Ok(self.do_move(dir));
        }

        let (verb_token, rest) = match lower.split_once(char::is_whitespace) {
            Some((v, r)) => (v, r.trim()),
            None => (lower.as_str(), ""),
        };
        let verb = Verb::resolve(verb_token)
            .ok_or_else(|| EngineError::UnknownCommand(trimmed.to_string()))?;

        match verb {
            Verb::Move => match Self::require_noun(verb, rest)? {
                Noun::Compass(dir) => Ok(self.do_move(dir)),
                _ => Ok("You can only go in a compass direction, or 'exit'.".to_string()),
            },
            Verb::Exit => Ok(self.do_exit()),
            Verb::Take => {
                let noun = Self::require_noun(verb, rest)?;
                Ok(self.do_take(noun))
            }
            Verb::Use => {
                let noun = Self::require_noun(verb, rest)?;
                Ok(self.do_use(noun))
            }
            Verb::Look => Ok(self.describe_current()),
            Verb::Inventory => Ok(self.do_inventory()),
            Verb::Greet => Ok(self.do_greet()),
            Verb::Start => Ok(self.do_start()),
            Verb::Answer => Ok("There is no question to answer right now.".to_string()),
            Verb::Help => Ok(Self::help_text()),
        }
    }

    fn current(&self) -> &Location {
        self.world.location(self.player.location)
    }

    fn require_noun(verb: Verb, rest: &str) -> EngineResult<Noun> {
        if rest.is_empty() {
            return Err(EngineError::MissingNoun(verb.word()));
        }
        Noun::resolve(rest).ok_or_else(|| EngineError::UnknownNoun(rest.to_string()))
    }

    fn pending_question(&self) -> bool {
        self.current()
            .trial
            .as_ref()
            .is_some_and(Trial::is_awaiting_answer)
    }

    // --- movement -------------------------------------------------------

    fn do_move(&mut self, dir: Direction) -> String {
        self.travel(
            dir.name(),
            format!("You can't go {} from here.", dir.name()),
        )
    }

    fn do_exit(&mut self) -> String {
        self.travel("exit", "There is no way out from here.".to_string())
    }

    fn travel(&mut self, key: &str, no_edge: String) -> String {
        let current = self.player.location;
        let Some(destination) = self.world.connection(current, key) else {
            return no_edge;
        };
        if let Some(refusal) = self.blocked(current) {
            return refusal;
        }
        self.player.location = destination;
        self.arrive(destination)
    }

    /// Whether leaving the given location is currently refused, and why.
    fn blocked(&self, id: LocationId) -> Option<String> {
        let loc = self.world.location(id);
        if let Some(trial) = &loc.trial {
            if !trial.is_passed() {
                return Some(format!(
                    "The chamber doors remain sealed. {} watches you in silence. \
                     No one leaves before the trial is passed.",
                    trial.judge()
                ));
            }
        }
        if loc.has_special(SpecialAction::UnlockDoor) && !loc.completed {
            return Some(
                "The exit door is locked tight. A panel beside it blinks expectantly."
                    .to_string(),
            );
        }
        None
    }

    fn arrive(&mut self, id: LocationId) -> String {
        let first = !self.world.location(id).visited;
        self.world.location_mut(id).visited = true;
        if first {
            self.describe_current()
        } else {
            let loc = self.world.location(id);
            let exits = loc.exit_keys();
            if exits.is_empty() {
                loc.short_desc.clone()
            } else {
                format!("{}\nExits: {}", loc.short_desc, exits.join(", "))
            }
        }
    }

    fn describe_current(&self) -> String {
        let loc = self.current();
        let mut output = format!("**{}**\n{}", loc.name, loc.long_desc);

        let items: Vec<&str> = loc
            .items
            .iter()
            .filter(|i| loc.is_available(i))
            .map(|i| i.name.as_str())
            .collect();
        if !items.is_empty() {
            output.push('\n');
            for name in items {
                output.push_str(&format!("\nYou see a {name} here."));
            }
        }

        if let Some(trial) = &loc.trial {
            output.push_str(&format!("\n\n{} is here.", trial.judge()));
        }

        let exits = loc.exit_keys();
        if !exits.is_empty() {
            output.push_str(&format!("\n\nExits: {}", exits.join(", ")));
        }

        output
    }

    // --- items ----------------------------------------------------------

    fn do_take(&mut self, noun: Noun) -> String {
        if matches!(noun, Noun::Compass(_)) {
            return "You can't carry a direction.".to_string();
        }
        let id = self.player.location;
        let position = {
            let loc = self.world.location(id);
            loc.items
                .iter()
                .position(|i| noun.matches_item(i) && loc.is_available(i))
        };
        match position {
            Some(i) => {
                let item = self.world.location_mut(id).items.remove(i);
                let name = item.name.clone();
                self.player.inventory.push(item);
                format!("You take the {name}.")
            }
            None => format!("There is no {} here.", noun.phrase()),
        }
    }

    fn do_use(&mut self, noun: Noun) -> String {
        if matches!(noun, Noun::Compass(_)) {
            return "That is not something you can use.".to_string();
        }
        match self
            .player
            .inventory
            .iter()
            .position(|i| noun.matches_item(i))
        {
            Some(i) => self.player.use_at(i),
            None => format!("You are not carrying a {}.", noun.phrase()),
        }
    }

    fn do_inventory(&self) -> String {
        let mut output = if self.player.inventory.is_empty() {
            "You are carrying nothing.".to_string()
        } else {
            let mut out = "You are carrying:\n".to_string();
            for item in &self.player.inventory {
                out.push_str(&format!("  - {}: {}\n", item.name, item.description));
            }
            out
        };
        output.push_str(&format!(
            "\nSatiety: {}. Hydration: {}.",
            self.player.satiety, self.player.hydration
        ));
        output
    }

    // --- trials ---------------------------------------------------------

    fn do_greet(&mut self) -> String {
        match &mut self.world.location_mut(self.player.location).trial {
            Some(trial) => trial.greet(),
            None => "There is no one here to greet.".to_string(),
        }
    }

    fn do_start(&mut self) -> String {
        match &mut self.world.location_mut(self.player.location).trial {
            Some(trial) => trial.begin(),
            None => "There is no trial to start here.".to_string(),
        }
    }

    fn submit_answer(&mut self, answer: &str) -> String {
        let id = self.player.location;
        let (reply, phase) = {
            let Some(trial) = self.world.location_mut(id).trial.as_mut() else {
                return "There is no question to answer right now.".to_string();
            };
            let reply = trial.submit(answer);
            (reply, trial.phase())
        };
        if let TrialPhase::Completed(verdict) = phase {
            let loc = self.world.location_mut(id);
            loc.completed = true;
            loc.passed = verdict.passed();
        }
        reply
    }

    // --- special commands -----------------------------------------------

    fn handle_special(&mut self, action: SpecialAction) -> String {
        match action {
            SpecialAction::UnlockDoor => self.unlock_door(),
            SpecialAction::OpenCompartments => self.open_compartments(),
            SpecialAction::MicrowaveMeal => self.microwave_meal(),
            SpecialAction::EatMeal => self.eat_inventory(Item::is_meal, "eat"),
            SpecialAction::DrinkWater => self.eat_inventory(Item::is_drink, "drink"),
            SpecialAction::CheckSystems => self.check_systems(),
        }
    }

    fn unlock_door(&mut self) -> String {
        let ready = self.player.satiety.is_full()
            && self.player.hydration.is_full()
            && self.player.heard_message;
        if !ready {
            let mut hints = Vec::new();
            if !self.player.satiety.is_full() {
                hints.push("your stomach growls");
            }
            if !self.player.hydration.is_full() {
                hints.push("your throat is parched");
            }
            if !self.player.heard_message {
                hints.push("you still have no idea why you are here");
            }
            return format!(
                "You pull at the door. It refuses to budge, and {}. \
                 You are in no state to face what is outside.",
                hints.join(", and ")
            );
        }
        let loc = self.world.location_mut(self.player.location);
        if loc.completed {
            return "The door already stands open.".to_string();
        }
        loc.completed = true;
        "With a long hiss the airlock unseals. The way out stands open. \
         Type 'exit' to step onto the planet surface."
            .to_string()
    }

    fn open_compartments(&mut self) -> String {
        let loc = self.world.location_mut(self.player.location);
        if loc.searched {
            return "The storage compartments already stand open.".to_string();
        }
        loc.searched = true;
        let revealed: Vec<String> = loc
            .items
            .iter()
            .filter(|i| i.stowed)
            .map(|i| format!("a {}", i.name))
            .collect();
        if revealed.is_empty() {
            "You open the storage compartments. They are empty.".to_string()
        } else {
            format!(
                "You open the storage compartments. Inside you find {}.",
                revealed.join(" and ")
            )
        }
    }

    fn microwave_meal(&mut self) -> String {
        match self.player.inventory.iter_mut().find(|i| i.is_meal()) {
            Some(meal) => {
                if meal.thaw() {
                    format!(
                        "The microwave hums for a minute. The {} comes out steaming hot.",
                        meal.name
                    )
                } else {
                    format!("The {} is already thawed.", meal.name)
                }
            }
            None => "You are not carrying anything that needs microwaving.".to_string(),
        }
    }

    fn eat_inventory(&mut self, wanted: fn(&Item) -> bool, act: &str) -> String {
        match self.player.inventory.iter().position(wanted) {
            Some(i) => self.player.use_at(i),
            None => format!("You are not carrying anything to {act}."),
        }
    }

    fn check_systems(&self) -> String {
        let message = if self.player.heard_message {
            "message received"
        } else {
            "one unplayed message"
        };
        format!(
            "Status console: life support nominal. Satiety {}. Hydration {}. \
             Comms: {message}.",
            self.player.satiety, self.player.hydration
        )
    }

    fn help_text() -> String {
        "**Commands**\n\
         go <direction> - move north, south, east or west (or just type the direction)\n\
         exit - leave through this location's way out\n\
         take <item> - pick up an item\n\
         use <item> - use a carried item\n\
         look - examine your surroundings\n\
         inventory (or i) - list what you're carrying\n\
         greet - address the judge present here\n\
         start - start the trial of the judge present here\n\
         help - show this text\n\
         quit - end the session\n\n\
         Some places respond to commands of their own. Look around."
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use em_core::{Location, Question};

    fn test_world() -> World {
        let mut world = World::new();

        let ship = Location::new(
            "Spaceship",
            "The cramped cabin of your spaceship.",
            "You are in the cramped cabin of your spaceship. A locked door leads outside.",
        )
        .with_item(Item::message_device(
            "iphone",
            "A sleek smartphone",
            "Priority message: Earth is gone. Convince the judges to shelter humanity.",
        ))
        .with_item(Item::frozen_meal("pizza", "A frozen pizza", 5).stowed())
        .with_item(
            Item::consumable(
                "water bottle",
                "A bottle of clean water",
                0,
                5,
                "You drink the water. Your thirst is quenched.",
                "The bottle is empty.",
            )
            .stowed(),
        )
        .with_special("open compartments", SpecialAction::OpenCompartments)
        .with_special("open door", SpecialAction::UnlockDoor)
        .with_special("microwave pizza", SpecialAction::MicrowaveMeal)
        .with_special("eat pizza", SpecialAction::EatMeal)
        .with_special("drink water", SpecialAction::DrinkWater)
        .with_special("check systems", SpecialAction::CheckSystems);
        let ship = world.add_location(ship).unwrap();

        let nexus = world
            .add_location(Location::new(
                "The Nexus",
                "The windswept plaza of the Nexus.",
                "A windswept plaza ringed by three towering chambers.",
            ))
            .unwrap();

        let mut chamber = Location::new(
            "Chamber of Logic",
            "The vaulted Chamber of Logic.",
            "A vaulted chamber of cold geometry.",
        );
        chamber
            .set_trial(
                Trial::new(
                    "Zyx",
                    "Zyx bows. \"Welcome, traveler. Say 'start' when you are ready.\"",
                    vec![
                        Question::multiple_choice(
                            "Which is a prime number?",
                            vec!["Six", "Seven", "Eight"],
                            vec!["b", "seven"],
                        ),
                        Question::open("What do you seek here?", vec!["shelter", "refuge"]),
                    ],
                )
                .unwrap(),
            )
            .unwrap();
        let chamber = world.add_location(chamber).unwrap();

        world.add_exit(ship, "exit", nexus).unwrap();
        world.add_exit(nexus, "south", ship).unwrap();
        world.add_exit(nexus, "north", chamber).unwrap();
        world.add_exit(chamber, "exit", nexus).unwrap();
        world.set_start(ship);
        world
    }

    fn session() -> GameSession {
        GameSession::new(test_world(), "Tester").unwrap()
    }

    /// Run the spaceship routine up to and including unlocking the door.
    fn unlock_ship(s: &mut GameSession) {
        for cmd in [
            "open compartments",
            "take pizza",
            "take water bottle",
            "microwave pizza",
            "eat pizza",
            "drink water",
            "take iphone",
            "use iphone",
            "open door",
        ] {
            s.process(cmd).unwrap();
        }
    }

    /// Walk from the unlocked ship into the chamber.
    fn enter_chamber(s: &mut GameSession) {
        s.process("exit").unwrap();
        s.process("north").unwrap();
    }

    #[test]
    fn empty_input_prompts() {
        let mut s = session();
        assert_eq!(s.process("   ").unwrap(), "Please enter a command.");
    }

    #[test]
    fn unknown_verb_is_an_error() {
        let mut s = session();
        let err = s.process("dance wildly").unwrap_err();
        assert!(err.to_string().contains("dance wildly"));
    }

    #[test]
    fn missing_and_unknown_nouns() {
        let mut s = session();
        let err = s.process("take").unwrap_err();
        assert_eq!(err.to_string(), "take what?");

        let err = s.process("take sandwich").unwrap_err();
        assert!(err.to_string().contains("sandwich"));
    }

    #[test]
    fn look_describes_location() {
        let mut s = session();
        let out = s.process("look").unwrap();
        assert!(out.contains("Spaceship"));
        assert!(out.contains("locked door"));
        assert!(out.contains("iphone"));
        assert!(out.contains("Exits: exit"));
    }

    #[test]
    fn stowed_items_hidden_until_searched() {
        let mut s = session();
        let out = s.process("look").unwrap();
        assert!(!out.contains("pizza"));

        let out = s.process("take pizza").unwrap();
        assert_eq!(out, "There is no pizza here.");

        let out = s.process("open compartments").unwrap();
        assert!(out.contains("pizza"));
        assert!(out.contains("water bottle"));

        let out = s.process("take pizza").unwrap();
        assert_eq!(out, "You take the pizza.");
        assert!(s.process("look").unwrap().contains("water bottle"));
    }

    #[test]
    fn take_moves_item_into_inventory() {
        let mut s = session();
        s.process("take iphone").unwrap();
        let inv = s.process("inventory").unwrap();
        assert!(inv.contains("iphone"));

        // The item left the location.
        let out = s.process("take iphone").unwrap();
        assert_eq!(out, "There is no iphone here.");
    }

    #[test]
    fn meal_needs_the_microwave() {
        let mut s = session();
        s.process("open compartments").unwrap();
        s.process("take pizza").unwrap();

        let out = s.process("eat pizza").unwrap();
        assert!(out.contains("frozen solid"));
        assert!(s.player().satiety.is_empty());

        s.process("microwave pizza").unwrap();
        let out = s.process("eat pizza").unwrap();
        assert!(out.contains("stronger"));
        assert!(s.player().satiety.is_full());
    }

    #[test]
    fn drinking_twice_only_counts_once() {
        let mut s = session();
        s.process("open compartments").unwrap();
        s.process("take water bottle").unwrap();

        s.process("drink water").unwrap();
        assert!(s.player().hydration.is_full());

        let out = s.process("drink water").unwrap();
        assert_eq!(out, "The bottle is empty.");
        assert!(s.player().hydration.is_full());
    }

    #[test]
    fn door_reports_missing_preconditions() {
        let mut s = session();
        let out = s.process("open door").unwrap();
        assert!(out.contains("stomach growls"));
        assert!(out.contains("throat is parched"));
        assert!(out.contains("no idea why you are here"));

        let out = s.process("exit").unwrap();
        assert!(out.contains("locked"));
        assert_eq!(s.player().location, s.world().find("Spaceship").unwrap());
    }

    #[test]
    fn door_opens_once_ready() {
        let mut s = session();
        unlock_ship(&mut s);

        let out = s.process("open door").unwrap();
        assert!(out.contains("already stands open"));

        let out = s.process("exit").unwrap();
        assert!(out.contains("The Nexus"));
        assert_eq!(s.player().location, s.world().find("The Nexus").unwrap());
    }

    #[test]
    fn movement_and_revisit_descriptions() {
        let mut s = session();
        unlock_ship(&mut s);
        let first = s.process("exit").unwrap();
        assert!(first.contains("ringed by three towering chambers"));

        s.process("south").unwrap();
        let second = s.process("exit").unwrap();
        assert!(second.contains("windswept plaza of the Nexus."));
        assert!(!second.contains("ringed by"));
    }

    #[test]
    fn cannot_go_where_no_edge_leads() {
        let mut s = session();
        unlock_ship(&mut s);
        s.process("exit").unwrap();
        let out = s.process("east").unwrap();
        assert_eq!(out, "You can't go east from here.");
    }

    #[test]
    fn greet_and_start_are_ordered() {
        let mut s = session();
        unlock_ship(&mut s);
        enter_chamber(&mut s);

        let out = s.process("start").unwrap();
        assert!(out.contains("must first greet"));

        let out = s.process("greet").unwrap();
        assert!(out.contains("Welcome, traveler"));

        let out = s.process("start").unwrap();
        assert!(out.contains("prime number"));
        assert!(out.contains("B) Seven"));
    }

    #[test]
    fn answers_route_without_a_verb() {
        let mut s = session();
        unlock_ship(&mut s);
        enter_chamber(&mut s);
        s.process("greet").unwrap();
        s.process("start").unwrap();

        // Any line is the answer while a question is pending, with or
        // without the explicit verb.
        let out = s.process("answer b").unwrap();
        assert!(out.contains("nods"));
        assert!(out.contains("What do you seek here?"));

        let out = s.process("we seek shelter").unwrap();
        assert!(out.contains("nods"));
        assert!(out.contains("You may pass"));
    }

    #[test]
    fn chamber_seals_until_passed() {
        let mut s = session();
        unlock_ship(&mut s);
        enter_chamber(&mut s);

        let out = s.process("exit").unwrap();
        assert!(out.contains("No one leaves"));

        s.process("greet").unwrap();
        s.process("start").unwrap();
        s.process("b").unwrap();
        s.process("shelter").unwrap();

        let out = s.process("exit").unwrap();
        assert!(out.contains("Nexus"));
        let status = s.status();
        assert_eq!(status.chambers_passed, 1);
        assert!(status.did_win());
    }

    #[test]
    fn failed_trial_ends_the_game() {
        let mut s = session();
        unlock_ship(&mut s);
        enter_chamber(&mut s);
        s.process("greet").unwrap();
        s.process("start").unwrap();
        s.process("wrong").unwrap();
        let out = s.process("also wrong").unwrap();
        assert!(out.contains("failed my trial"));

        let status = s.status();
        assert!(status.did_lose());
        assert!(status.is_over());
    }

    #[test]
    fn answer_without_question_is_explained() {
        let mut s = session();
        let out = s.process("answer forty-two").unwrap();
        assert_eq!(out, "There is no question to answer right now.");
    }

    #[test]
    fn greet_without_judge_is_explained() {
        let mut s = session();
        assert_eq!(
            s.process("greet").unwrap(),
            "There is no one here to greet."
        );
        assert_eq!(
            s.process("start").unwrap(),
            "There is no trial to start here."
        );
    }

    #[test]
    fn inventory_reports_vitals() {
        let mut s = session();
        let out = s.process("i").unwrap();
        assert!(out.contains("carrying nothing"));
        assert!(out.contains("Satiety: 0/5"));
        assert!(out.contains("Hydration: 0/5"));
    }

    #[test]
    fn help_lists_the_verbs() {
        let mut s = session();
        let out = s.process("help").unwrap();
        for word in ["go", "take", "use", "look", "inventory", "greet", "start"] {
            assert!(out.contains(word), "help is missing {word}");
        }
    }

    #[test]
    fn opening_shows_the_long_description() {
        let mut s = session();
        let out = s.opening();
        assert!(out.contains("cramped cabin"));
        assert!(out.contains("locked door"));
    }
}

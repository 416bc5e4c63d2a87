//! Construction of the fixed game world.
//!
//! Five locations: the crashed spaceship (start), the Nexus plaza, and
//! the three judged chambers. Built fresh for every session; nothing here
//! is loaded from files.

use em_core::{CoreResult, Item, Location, Question, SpecialAction, Trial, World};

use crate::text::MISSION_BRIEFING;

/// Build the game world. Errors only on authoring mistakes, which the
/// tests below rule out.
pub fn build_world() -> CoreResult<World> {
    let mut world = World::new();

    let spaceship = world.add_location(spaceship())?;
    let nexus = world.add_location(Location::new(
        "The Nexus",
        "The windswept plaza of the Nexus.",
        "A windswept plaza of pale stone, ringed by three towering chambers. \
         Carved doorways face north, east and west, and behind you, south, \
         your ship rests in the silver grass. Each doorway bears a sigil: \
         a spiral to the north, an open hand to the east, a single \
         unblinking eye to the west.",
    ))?;
    let logic = world.add_location(chamber_of_logic()?)?;
    let empathy = world.add_location(chamber_of_empathy()?)?;
    let trust = world.add_location(chamber_of_trust()?)?;

    world.add_exit(spaceship, "exit", nexus)?;
    world.add_exit(nexus, "south", spaceship)?;
    world.add_exit(nexus, "north", logic)?;
    world.add_exit(nexus, "east", empathy)?;
    world.add_exit(nexus, "west", trust)?;
    world.add_exit(logic, "exit", nexus)?;
    world.add_exit(empathy, "exit", nexus)?;
    world.add_exit(trust, "exit", nexus)?;

    world.set_start(spaceship);
    Ok(world)
}

fn spaceship() -> Location {
    Location::new(
        "Spaceship",
        "The cramped cabin of your spaceship.",
        "You are in the cramped cabin of your spaceship. Status lights \
         blink across the console, storage compartments line the wall, \
         and a microwave sits bolted above the galley bench. The exit \
         door is sealed; a safety interlock will not release it until \
         you are fit to leave. Something on the bench is beeping.",
    )
    .with_item(Item::message_device(
        "iphone",
        "Your old phone. One message light blinks insistently",
        MISSION_BRIEFING,
    ))
    .with_item(
        Item::frozen_meal("pizza", "A pizza, frozen hard as hull plating", 5).stowed(),
    )
    .with_item(
        Item::consumable(
            "water bottle",
            "A sealed bottle of clean water",
            0,
            5,
            "You drink the whole bottle. Your thirst is quenched.",
            "The bottle is empty.",
        )
        .stowed(),
    )
    .with_special("open compartments", SpecialAction::OpenCompartments)
    .with_special("check compartments", SpecialAction::OpenCompartments)
    .with_special("open door", SpecialAction::UnlockDoor)
    .with_special("unlock door", SpecialAction::UnlockDoor)
    .with_special("microwave pizza", SpecialAction::MicrowaveMeal)
    .with_special("eat pizza", SpecialAction::EatMeal)
    .with_special("drink water", SpecialAction::DrinkWater)
    .with_special("check systems", SpecialAction::CheckSystems)
}

fn chamber_of_logic() -> CoreResult<Location> {
    let mut chamber = Location::new(
        "Chamber of Logic",
        "The cold geometry of the Chamber of Logic.",
        "A vaulted chamber of cold geometry. Every surface is ruled into \
         perfect polygons, and the air itself feels calculated. Zyx, the \
         judge of logic, regards you from a raised dais of interlocking \
         triangles.",
    );
    chamber.set_trial(Trial::new(
        "Zyx",
        "Zyx inclines a faceted head. \"So. The messenger. I am Zyx, and I \
         judge minds. When you are ready to be measured, say 'start'.\"",
        vec![
            Question::multiple_choice(
                "\"Two ships depart together. One travels at half the speed of \
                 light, the other at a quarter. Which reaches the outer beacon \
                 first?\"",
                vec!["The faster ship", "The slower ship", "Neither"],
                vec!["a", "faster"],
            ),
            Question::open(
                "\"Complete the sequence: two, four, eight, sixteen...\"",
                vec!["thirty-two", "32"],
            ),
            Question::multiple_choice(
                "\"All messengers speak truth. You are a messenger. What do you \
                 speak?\"",
                vec!["Lies", "The truth", "Nothing"],
                vec!["b", "truth"],
            ),
            Question::open(
                "\"A final measure. How many judges must you convince on this \
                 world?\"",
                vec!["three", "3"],
            ),
        ],
    )?)?;
    Ok(chamber)
}

fn chamber_of_empathy() -> CoreResult<Location> {
    let mut chamber = Location::new(
        "Chamber of Empathy",
        "The warm dusk of the Chamber of Empathy.",
        "A round chamber lit like a long dusk. The walls breathe slowly, \
         and the floor is warm underfoot. Veyra, the judge of empathy, \
         waits at its center with too many eyes, all of them gentle.",
    );
    chamber.set_trial(Trial::new(
        "Veyra",
        "Veyra's eyes settle on you, every one. \"Welcome, tired one. I am \
         Veyra, and I judge hearts. Say 'start' when yours is ready.\"",
        vec![
            Question::open(
                "\"Your world is gone, little messenger. Tell me plainly: what \
                 do you feel?\"",
                vec!["grief", "sorrow", "sadness", "loss"],
            ),
            Question::multiple_choice(
                "\"A stranger starves beside you, and you carry a single meal. \
                 What do you do?\"",
                vec!["Eat it yourself", "Share it", "Hide it"],
                vec!["b", "share"],
            ),
            Question::open(
                "\"And for the sleepers you carry, what do you ask of us?\"",
                vec!["shelter", "refuge", "a home", "home"],
            ),
            Question::multiple_choice(
                "\"When another being weeps before you, you...\"",
                vec!["Look away", "Sit with them", "Laugh"],
                vec!["b", "sit"],
            ),
        ],
    )?)?;
    Ok(chamber)
}

fn chamber_of_trust() -> CoreResult<Location> {
    let mut chamber = Location::new(
        "Chamber of Trust",
        "The bare stone of the Chamber of Trust.",
        "A bare chamber of dark stone, empty of ornament. There is nowhere \
         to hide anything here, least of all an untruth. Korrin, the judge \
         of trust, stands motionless against the far wall, a single \
         unblinking eye fixed on you.",
    );
    chamber.set_trial(Trial::new(
        "Korrin",
        "Korrin does not move, but the eye narrows. \"I am Korrin. I judge \
         what your kind calls honesty. Say 'start', and do not bother \
         lying here.\"",
        vec![
            Question::open(
                "\"First question. Have you ever, in your life, told a lie?\"",
                vec!["yes"],
            ),
            Question::multiple_choice(
                "\"You find a sealed crate that is not yours. What do you do \
                 with it?\"",
                vec!["Open it", "Leave it sealed", "Sell it"],
                vec!["b", "leave"],
            ),
            Question::open(
                "\"If we shelter your people, what does your kind offer in \
                 return?\"",
                vec!["work", "help", "loyalty", "friendship"],
            ),
            Question::multiple_choice(
                "\"A promise made under duress is...\"",
                vec!["Void", "Still a promise", "A joke"],
                vec!["b", "promise"],
            ),
        ],
    )?)?;
    Ok(chamber)
}

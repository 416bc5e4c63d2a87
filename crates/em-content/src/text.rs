//! Narrative prose shown by the host loop.

/// Shown once at session start, before the first location description.
pub const INTRO: &str = "\
EARTH MESSENGER

You wake with a jolt as your ship settles onto alien soil. The engines
tick as they cool. Through the viewport stretches a plain of silver
grass under two pale suns.

You are hungry, you are thirsty, and you cannot remember why you came.
Somewhere in the cabin, something is beeping.";

/// The recorded briefing carried by the iphone.
pub const MISSION_BRIEFING: &str = "\
The screen flickers to life. A tired face you half remember looks out
at you.

\"Priority message. If you are hearing this, you made it. Earth is
gone. You carry the last of us in cold sleep behind you. The beings of
this world will take us in, but only if their three judges find you
worthy. Seek the Nexus. Face the Chamber of Logic, the Chamber of
Empathy, and the Chamber of Trust. Convince them all. You are the
messenger now.\"

The recording ends.";

/// Closing prose for a finished session.
pub fn outro(won: bool) -> &'static str {
    if won {
        "\
The three judges gather in the Nexus and speak with one voice: \"The
messenger has been weighed and found worthy. Your people have a home.\"

Behind you, the first sleeper pods begin to warm. You did it.

*** YOU HAVE WON ***"
    } else {
        "\
The chamber doors grind shut around you. A voice, neither kind nor
cruel, fills the air: \"The messenger has been weighed and found
wanting. This world is closed to your kind.\"

The last hope of Earth fades with the light.

*** GAME OVER ***"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn briefing_names_all_three_chambers() {
        for chamber in ["Logic", "Empathy", "Trust"] {
            assert!(MISSION_BRIEFING.contains(chamber));
        }
    }

    #[test]
    fn outro_matches_outcome() {
        assert!(outro(true).contains("YOU HAVE WON"));
        assert!(outro(false).contains("GAME OVER"));
    }
}

use std::fmt::Display;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::tally::Tally;

const BLANK: Tally = Tally::BLANK;
const SUCCESS: Tally = Tally { success: 1, ..BLANK };
const SUCCESS_SUCCESS: Tally = Tally { success: 2, ..BLANK };
const ADVANTAGE: Tally = Tally { advantage: 1, ..BLANK };
const ADVANTAGE_ADVANTAGE: Tally = Tally { advantage: 2, ..BLANK };
const SUCCESS_ADVANTAGE: Tally = Tally { success: 1, advantage: 1, ..BLANK };
const FAILURE: Tally = Tally { failure: 1, ..BLANK };
const FAILURE_FAILURE: Tally = Tally { failure: 2, ..BLANK };
const THREAT: Tally = Tally { threat: 1, ..BLANK };
const THREAT_THREAT: Tally = Tally { threat: 2, ..BLANK };
const FAILURE_THREAT: Tally = Tally { failure: 1, threat: 1, ..BLANK };
const TRIUMPH: Tally = Tally { triumph: 1, ..BLANK };
const DESPAIR: Tally = Tally { despair: 1, ..BLANK };
const DARK: Tally = Tally { dark: 1, ..BLANK };
const DARK_DARK: Tally = Tally { dark: 2, ..BLANK };
const LIGHT: Tally = Tally { light: 1, ..BLANK };
const LIGHT_LIGHT: Tally = Tally { light: 2, ..BLANK };

// The face lists are the probability tables of the game: a face appearing
// twice is twice as likely, there is no separate weight field. Changing a
// single entry changes the distribution the whole crate exists to reproduce.

#[rustfmt::skip]
static BOOST_FACES: [Tally; 6] = [
    BLANK, BLANK, SUCCESS, SUCCESS_ADVANTAGE, ADVANTAGE_ADVANTAGE, ADVANTAGE,
];

#[rustfmt::skip]
static SETBACK_FACES: [Tally; 6] = [
    BLANK, BLANK, FAILURE, FAILURE, THREAT, THREAT,
];

#[rustfmt::skip]
static ABILITY_FACES: [Tally; 8] = [
    BLANK, SUCCESS, SUCCESS, SUCCESS_SUCCESS,
    ADVANTAGE, ADVANTAGE, SUCCESS_ADVANTAGE, ADVANTAGE_ADVANTAGE,
];

#[rustfmt::skip]
static DIFFICULTY_FACES: [Tally; 8] = [
    BLANK, FAILURE, FAILURE_FAILURE, THREAT,
    THREAT, THREAT, THREAT_THREAT, FAILURE_THREAT,
];

#[rustfmt::skip]
static PROFICIENCY_FACES: [Tally; 12] = [
    BLANK, SUCCESS, SUCCESS, SUCCESS_SUCCESS, SUCCESS_SUCCESS,
    ADVANTAGE, SUCCESS_ADVANTAGE, SUCCESS_ADVANTAGE, SUCCESS_ADVANTAGE,
    ADVANTAGE_ADVANTAGE, ADVANTAGE_ADVANTAGE, TRIUMPH,
];

#[rustfmt::skip]
static CHALLENGE_FACES: [Tally; 12] = [
    BLANK, FAILURE, FAILURE, FAILURE_FAILURE, FAILURE_FAILURE,
    THREAT, THREAT, FAILURE_THREAT, FAILURE_THREAT,
    THREAT_THREAT, THREAT_THREAT, DESPAIR,
];

#[rustfmt::skip]
static FORCE_FACES: [Tally; 12] = [
    DARK, DARK, DARK, DARK, DARK, DARK, DARK_DARK,
    LIGHT, LIGHT, LIGHT_LIGHT, LIGHT_LIGHT, LIGHT_LIGHT,
];

/// One of the seven dice of the narrative system.
///
/// The first six share the success/advantage/failure/threat/triumph/despair
/// vocabulary; [`Die::Force`] only ever shows dark and light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Die {
    Boost,
    Setback,
    Ability,
    Difficulty,
    Proficiency,
    Challenge,
    Force,
}

impl Die {
    /// Every die, in the order pools draw them.
    pub const ALL: [Die; 7] = [
        Die::Boost,
        Die::Setback,
        Die::Ability,
        Die::Difficulty,
        Die::Proficiency,
        Die::Challenge,
        Die::Force,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Die::Boost => "boost",
            Die::Setback => "setback",
            Die::Ability => "ability",
            Die::Difficulty => "difficulty",
            Die::Proficiency => "proficiency",
            Die::Challenge => "challenge",
            Die::Force => "force",
        }
    }

    /// The fixed face list of this die. Always non-empty; the slice length
    /// is the number of physical sides.
    pub fn faces(self) -> &'static [Tally] {
        match self {
            Die::Boost => &BOOST_FACES,
            Die::Setback => &SETBACK_FACES,
            Die::Ability => &ABILITY_FACES,
            Die::Difficulty => &DIFFICULTY_FACES,
            Die::Proficiency => &PROFICIENCY_FACES,
            Die::Challenge => &CHALLENGE_FACES,
            Die::Force => &FORCE_FACES,
        }
    }

    pub fn sides(self) -> usize {
        self.faces().len()
    }

    /// Draws one face uniformly at random.
    pub fn roll(self, rng: &mut impl Rng) -> Tally {
        let faces = self.faces();
        faces[rng.gen_range(0..faces.len())]
    }
}

impl FromStr for Die {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boost" => Ok(Die::Boost),
            "setback" => Ok(Die::Setback),
            "ability" => Ok(Die::Ability),
            "difficulty" => Ok(Die::Difficulty),
            "proficiency" => Ok(Die::Proficiency),
            "challenge" => Ok(Die::Challenge),
            "force" => Ok(Die::Force),
            _ => Err(Error::UnknownDie(s.to_string())),
        }
    }
}

impl Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

use std::fmt::Display;

use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dice::Die;
use crate::error::Error;
use crate::tally::Tally;

/// How many of each die to roll: the request side of one resolution.
///
/// Counts are signed because they typically arrive straight from a form
/// field; [`Pool::roll`] rejects the whole request if any count is negative,
/// before any randomness is consumed. An all-zero pool is valid and rolls to
/// the all-zero outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pool {
    pub boost: i32,
    pub setback: i32,
    pub ability: i32,
    pub difficulty: i32,
    pub proficiency: i32,
    pub challenge: i32,
    pub force: i32,
}

impl Pool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper: `Pool::new().with(Die::Ability, 2)`.
    pub fn with(mut self, die: Die, count: i32) -> Self {
        *self.count_mut(die) = count;
        self
    }

    pub fn count(&self, die: Die) -> i32 {
        match die {
            Die::Boost => self.boost,
            Die::Setback => self.setback,
            Die::Ability => self.ability,
            Die::Difficulty => self.difficulty,
            Die::Proficiency => self.proficiency,
            Die::Challenge => self.challenge,
            Die::Force => self.force,
        }
    }

    pub(crate) fn count_mut(&mut self, die: Die) -> &mut i32 {
        match die {
            Die::Boost => &mut self.boost,
            Die::Setback => &mut self.setback,
            Die::Ability => &mut self.ability,
            Die::Difficulty => &mut self.difficulty,
            Die::Proficiency => &mut self.proficiency,
            Die::Challenge => &mut self.challenge,
            Die::Force => &mut self.force,
        }
    }

    /// Total number of dice the pool asks for. Only meaningful once the
    /// counts are known to be non-negative.
    pub fn total(&self) -> i32 {
        Die::ALL.into_iter().map(|die| self.count(die)).sum()
    }

    fn validate(&self) -> Result<(), Error> {
        for die in Die::ALL {
            let count = self.count(die);
            if count < 0 {
                return Err(Error::NegativeCount { die, count });
            }
        }
        Ok(())
    }

    /// Rolls the pool.
    /// Uses rand::thread_rng(), if you want to choose the rng yourself use `roll_with()`.
    pub fn roll(&self) -> Result<PoolOutcome, Error> {
        self.roll_with(&mut thread_rng())
    }

    /// Rolls the pool with the rng specified.
    ///
    /// Draws every requested face uniformly and independently, sums the
    /// drawn faces into the raw tally, then nets opposing symbols with
    /// [`Tally::cancel`]. The draw order is fixed (the [`Die::ALL`] order)
    /// but only affects which face lands in which [`DieRoll`] slot; the
    /// summed tallies are order-independent.
    pub fn roll_with(&self, rng: &mut impl Rng) -> Result<PoolOutcome, Error> {
        self.validate()?;

        let mut rolls = Vec::with_capacity(self.total() as usize);
        for die in Die::ALL {
            for _ in 0..self.count(die) {
                rolls.push(DieRoll {
                    die,
                    face: die.roll(rng),
                });
            }
        }

        let raw: Tally = rolls.iter().map(|roll| roll.face).sum();
        let canceled = raw.cancel();
        debug!(dice = rolls.len(), %raw, %canceled, "rolled pool");

        Ok(PoolOutcome {
            rolls,
            raw,
            canceled,
        })
    }
}

/// One drawn die and the face it landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieRoll {
    pub die: Die,
    pub face: Tally,
}

/// The result of rolling one pool: the literal faces drawn, their raw sum,
/// and the sum after cancellation. Built and consumed within one request,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolOutcome {
    rolls: Vec<DieRoll>,
    raw: Tally,
    canceled: Tally,
}

impl PoolOutcome {
    /// Every drawn face, in draw order, for callers that want to show the
    /// individual dice.
    pub fn rolls(&self) -> &[DieRoll] {
        &self.rolls
    }

    /// The summed symbols before any cancellation.
    pub fn raw(&self) -> Tally {
        self.raw
    }

    /// The final narrative result, opposing symbols netted.
    pub fn canceled(&self) -> Tally {
        self.canceled
    }
}

impl Display for PoolOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, roll) in self.rolls.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", roll.face)?;
        }
        write!(f, "]")
    }
}

//! Roll pools of the seven custom symbol dice used by narrative tabletop
//! games and net opposing symbols into a final result.
//!
//! ```rust
//! # use narrative_dice::{roll, roll_with, Die, Pool};
//! # use rand::rngs::StdRng;
//! # use rand::SeedableRng;
//! #
//! # fn main() -> Result<(), narrative_dice::Error> {
//! // Roll two ability, one proficiency and three difficulty dice.
//! let outcome = roll("2a 1p 3d")?;
//! println!("{outcome} = {}", outcome.canceled());
//!
//! // Use a custom Rng that implements the rand::Rng trait
//! let mut rng = StdRng::seed_from_u64(1);
//! let outcome = roll_with("2a 1p 3d", &mut rng)?;
//!
//! // Build the pool directly without parsing
//! let pool = Pool::new().with(Die::Ability, 2).with(Die::Difficulty, 2);
//! let outcome = pool.roll()?;
//! println!("{outcome} = {}", outcome.canceled());
//!
//! # Ok(())
//! # }
//! ```

mod dice;
mod error;
mod parse;
mod pool;
mod tally;

pub use dice::Die;
pub use error::Error;
pub use pool::{DieRoll, Pool, PoolOutcome};
pub use tally::Tally;

/// Parses pool notation into the pool it describes without rolling it.
pub fn parse(notation: &str) -> Result<Pool, Error> {
    Pool::parse(notation)
}

/// Parses pool notation and rolls the resulting pool.
pub fn roll(notation: &str) -> Result<PoolOutcome, Error> {
    Pool::parse(notation)?.roll()
}

/// Same as `roll()` but allows you to choose the rng you prefer to use.
pub fn roll_with(notation: &str, rng: &mut impl rand::Rng) -> Result<PoolOutcome, Error> {
    Pool::parse(notation)?.roll_with(rng)
}

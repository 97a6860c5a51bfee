use thiserror::Error;

use crate::dice::Die;

/// Everything that can go wrong before a single die is drawn.
///
/// All variants are input-validation failures: they are detected
/// synchronously, no randomness is consumed first, and nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A name outside the fixed set of seven dice.
    #[error("unknown die name `{0}`")]
    UnknownDie(String),

    /// A pool asked for a negative number of dice. The whole request is
    /// rejected, not just the offending die.
    #[error("cannot roll {count} {die} dice")]
    NegativeCount { die: Die, count: i32 },

    /// Pool notation that did not parse.
    #[error("invalid pool notation: {0}")]
    Notation(String),
}

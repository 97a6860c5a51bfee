use winnow::{
    ascii::{dec_uint, multispace0},
    combinator::{alt, opt, preceded, repeat, terminated},
    error::{
        StrContext::{Expected, Label},
        StrContextValue::Description,
    },
    PResult, Parser,
};

use crate::dice::Die;
use crate::error::Error;
use crate::pool::Pool;

impl Pool {
    /// Parses pool notation: a sequence of terms, each an optional count
    /// followed by a die name or its one-letter code.
    ///
    /// `"2a 1p 3d"`, `"2ability 1proficiency 3difficulty"` and `"apdd"` all
    /// parse; repeated terms for the same die accumulate. An empty notation
    /// is the empty pool. The count must touch its die code (`"2 a"` does
    /// not parse).
    pub fn parse(input: &str) -> Result<Pool, Error> {
        pool.parse(input)
            .map_err(|e| Error::Notation(e.to_string()))
    }
}

fn pool(input: &mut &str) -> PResult<Pool> {
    preceded(
        multispace0,
        repeat(0.., terminated(term, multispace0)).fold(Pool::new, |mut pool, (count, die)| {
            let slot = pool.count_mut(die);
            *slot = slot.saturating_add(count as i32);
            pool
        }),
    )
    .parse_next(input)
}

fn term(input: &mut &str) -> PResult<(u16, Die)> {
    (
        opt(dec_uint)
            .map(|count| count.unwrap_or(1))
            .context(Label("dice count"))
            .context(Expected(Description(
                "count must either be a number or empty (to indicate 1 die)",
            ))),
        die_code,
    )
        .parse_next(input)
}

fn die_code(input: &mut &str) -> PResult<Die> {
    alt((
        "boost".value(Die::Boost),
        "setback".value(Die::Setback),
        "ability".value(Die::Ability),
        "difficulty".value(Die::Difficulty),
        "proficiency".value(Die::Proficiency),
        "challenge".value(Die::Challenge),
        "force".value(Die::Force),
        'b'.value(Die::Boost),
        's'.value(Die::Setback),
        'a'.value(Die::Ability),
        'd'.value(Die::Difficulty),
        'p'.value(Die::Proficiency),
        'c'.value(Die::Challenge),
        'f'.value(Die::Force),
    ))
    .context(Label("die"))
    .context(Expected(Description(
        "a die name (boost, setback, ability, difficulty, proficiency, challenge, force) or its first letter",
    )))
    .parse_next(input)
}

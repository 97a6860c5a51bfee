use std::fmt::Display;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// A count of every symbol accumulated across one or more rolled faces.
///
/// The all-zero tally is the identity under addition, so summing any number
/// of faces (including none) is a plain fold starting from [`Tally::BLANK`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub success: u32,
    pub advantage: u32,
    pub failure: u32,
    pub threat: u32,
    pub triumph: u32,
    pub despair: u32,
    pub dark: u32,
    pub light: u32,
}

impl Tally {
    /// The blank face: no symbols at all.
    pub const BLANK: Tally = Tally {
        success: 0,
        advantage: 0,
        failure: 0,
        threat: 0,
        triumph: 0,
        despair: 0,
        dark: 0,
        light: 0,
    };

    pub fn is_blank(&self) -> bool {
        *self == Tally::BLANK
    }

    /// Nets the opposing symbol pairs into the final narrative result.
    ///
    /// Three axes are netted, each computed from the raw counters:
    /// - success vs failure, with triumph counting as an extra success and
    ///   despair as an extra failure;
    /// - advantage vs threat;
    /// - triumph vs despair, reporting which of the two survives.
    ///
    /// The axes are intentionally independent of each other: none of the
    /// formulas reads another formula's output, only the raw counters.
    /// `dark` and `light` take no part in cancellation and pass through.
    pub fn cancel(&self) -> Tally {
        let successes = self.success + self.triumph;
        let failures = self.failure + self.despair;

        Tally {
            success: successes.saturating_sub(failures),
            failure: failures.saturating_sub(successes),
            advantage: self.advantage.saturating_sub(self.threat),
            threat: self.threat.saturating_sub(self.advantage),
            triumph: self.triumph.saturating_sub(self.despair),
            despair: self.despair.saturating_sub(self.triumph),
            dark: self.dark,
            light: self.light,
        }
    }
}

impl Add for Tally {
    type Output = Tally;

    fn add(self, rhs: Tally) -> Tally {
        Tally {
            success: self.success + rhs.success,
            advantage: self.advantage + rhs.advantage,
            failure: self.failure + rhs.failure,
            threat: self.threat + rhs.threat,
            triumph: self.triumph + rhs.triumph,
            despair: self.despair + rhs.despair,
            dark: self.dark + rhs.dark,
            light: self.light + rhs.light,
        }
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Tally) {
        *self = *self + rhs;
    }
}

impl Sum for Tally {
    fn sum<I: Iterator<Item = Tally>>(iter: I) -> Tally {
        iter.fold(Tally::BLANK, Tally::add)
    }
}

impl Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts = [
            (self.success, "S"),
            (self.advantage, "A"),
            (self.failure, "F"),
            (self.threat, "Th"),
            (self.triumph, "Tr"),
            (self.despair, "D"),
            (self.dark, "Dk"),
            (self.light, "L"),
        ];

        let mut first = true;
        for (count, notation) in parts {
            for _ in 0..count {
                if !first {
                    write!(f, "+")?;
                }
                write!(f, "{notation}")?;
                first = false;
            }
        }

        if first {
            write!(f, "-")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(
        success: u32,
        advantage: u32,
        failure: u32,
        threat: u32,
        triumph: u32,
        despair: u32,
    ) -> Tally {
        Tally {
            success,
            advantage,
            failure,
            threat,
            triumph,
            despair,
            ..Tally::BLANK
        }
    }

    #[test]
    fn test_blank_is_additive_identity() {
        let t = tally(1, 2, 3, 4, 5, 6);
        assert_eq!(t + Tally::BLANK, t);
        assert_eq!(Tally::BLANK + t, t);
    }

    #[test]
    fn test_sum_of_no_tallies_is_blank() {
        let total: Tally = std::iter::empty().sum();
        assert_eq!(total, Tally::BLANK);
    }

    #[test]
    fn test_cancel_success_failure_axis_counts_triumph_and_despair() {
        // 1 success + 1 triumph against 1 failure nets to 1 success.
        let canceled = tally(1, 0, 1, 2, 1, 0).cancel();
        assert_eq!(canceled, tally(1, 0, 0, 2, 1, 0));
    }

    #[test]
    fn test_cancel_advantage_threat_axis() {
        let canceled = tally(0, 2, 0, 5, 0, 0).cancel();
        assert_eq!(canceled, tally(0, 0, 0, 3, 0, 0));
    }

    #[test]
    fn test_cancel_axes_are_independent() {
        // Triumph still reports as surviving even though the success/failure
        // axis already counted it: the formulas share inputs, not outputs.
        let canceled = tally(0, 0, 1, 0, 1, 0).cancel();
        assert_eq!(canceled, tally(0, 0, 1, 0, 1, 0));
    }

    #[test]
    fn test_cancel_equal_triumph_despair_cancel_out() {
        let canceled = tally(0, 0, 0, 0, 2, 2).cancel();
        assert_eq!(canceled.triumph, 0);
        assert_eq!(canceled.despair, 0);
    }

    #[test]
    fn test_cancel_leaves_dark_and_light_untouched() {
        let raw = Tally {
            dark: 3,
            light: 2,
            ..tally(4, 0, 1, 0, 0, 2)
        };
        let canceled = raw.cancel();
        assert_eq!(canceled.dark, 3);
        assert_eq!(canceled.light, 2);
    }

    #[test]
    fn test_display_notation() {
        assert_eq!(Tally::BLANK.to_string(), "-");
        assert_eq!(tally(1, 1, 0, 0, 0, 0).to_string(), "S+A");
        assert_eq!(tally(0, 0, 0, 2, 0, 0).to_string(), "Th+Th");
        let force = Tally {
            light: 2,
            ..Tally::BLANK
        };
        assert_eq!(force.to_string(), "L+L");
    }
}

//! Discrete turn counter.
//!
//! Turn 1 is the first turn in which ants move.  `Turn::ZERO` is the state
//! before the simulation starts and never appears in a transcript.

use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn(pub u32);

impl Turn {
    pub const ZERO: Turn = Turn(0);

    /// The turn after `self`.
    #[inline]
    pub fn next(self) -> Turn {
        Turn(self.0 + 1)
    }

    /// Number of turns elapsed since `Turn::ZERO`.
    #[inline]
    pub fn count(self) -> usize {
        self.0 as usize
    }
}

impl std::ops::Add<u32> for Turn {
    type Output = Turn;
    #[inline]
    fn add(self, rhs: u32) -> Turn {
        Turn(self.0 + rhs)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

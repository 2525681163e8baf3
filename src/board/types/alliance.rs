//! The two sides of the game.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A side in the game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Alliance {
    White,
    Black,
}

impl Alliance {
    /// Both alliances in index order (White=0, Black=1)
    pub const BOTH: [Alliance; 2] = [Alliance::White, Alliance::Black];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Alliance::White => 0,
            Alliance::Black => 1,
        }
    }

    /// Returns the opposite alliance
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Alliance {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }

    /// Sign of "forward" in coordinate space.
    ///
    /// White starts on the high rows and advances towards row 0, so its
    /// direction is -1; Black advances towards row 7.
    #[inline]
    #[must_use]
    pub const fn direction(self) -> i8 {
        match self {
            Alliance::White => -1,
            Alliance::Black => 1,
        }
    }

    /// Row holding this alliance's pawns in the starting setup
    #[inline]
    #[must_use]
    pub const fn pawn_start_row(self) -> usize {
        match self {
            Alliance::White => 6,
            Alliance::Black => 1,
        }
    }

    /// Row holding this alliance's pieces in the starting setup
    #[inline]
    #[must_use]
    pub const fn back_row(self) -> usize {
        match self {
            Alliance::White => 7,
            Alliance::Black => 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_white(self) -> bool {
        matches!(self, Alliance::White)
    }

    #[inline]
    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Alliance::Black)
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alliance::White => write!(f, "White"),
            Alliance::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for alliance in Alliance::BOTH {
            assert_ne!(alliance, alliance.opponent());
            assert_eq!(alliance, alliance.opponent().opponent());
        }
    }

    #[test]
    fn test_directions_oppose() {
        assert_eq!(
            Alliance::White.direction(),
            -Alliance::Black.direction()
        );
    }
}

//! Linear board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::CoordError;

/// Number of coordinates on the board.
pub const NUM_SQUARES: usize = 64;

/// Number of squares in one row (and one column).
pub const ROW_LEN: usize = 8;

/// A board coordinate in `0..64`.
///
/// Coordinate 0 is a8 and 63 is h1: rows run top to bottom from White's
/// point of view, columns run a to h. A `Coord` can only be built from an
/// in-range index, so any value of this type is a valid board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Coord(u8);

impl Coord {
    /// Create a coordinate with bounds checking.
    #[inline]
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < NUM_SQUARES {
            Some(Coord(index as u8))
        } else {
            None
        }
    }

    /// Create a coordinate from an index that the caller guarantees is in range.
    ///
    /// # Panics
    /// Panics if `index >= 64`. Passing an off-board index here is a
    /// programming error, not a recoverable condition.
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < NUM_SQUARES, "board coordinate out of range");
        Coord(index as u8)
    }

    /// Create a coordinate from a column (0 = file a) and row (0 = rank 8).
    #[must_use]
    pub const fn from_column_row(column: usize, row: usize) -> Option<Self> {
        if column < ROW_LEN && row < ROW_LEN {
            Some(Coord((row * ROW_LEN + column) as u8))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Column of the coordinate, 0 for file a through 7 for file h.
    #[inline]
    #[must_use]
    pub const fn column(self) -> usize {
        self.0 as usize % ROW_LEN
    }

    /// Row of the coordinate, 0 for rank 8 through 7 for rank 1.
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / ROW_LEN
    }

    /// Chess rank (1-8) of the coordinate.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        ROW_LEN - self.row()
    }

    /// Apply a raw linear offset. Returns `None` if the result leaves `0..64`.
    ///
    /// This only checks the linear range. Offsets that cross the left or
    /// right edge still land on the board; callers must reject those with a
    /// column check before relying on the result.
    #[inline]
    #[must_use]
    pub const fn offset(self, delta: i8) -> Option<Self> {
        let target = self.0 as i16 + delta as i16;
        if target >= 0 && target < NUM_SQUARES as i16 {
            Some(Coord(target as u8))
        } else {
            None
        }
    }

    /// Iterate over all 64 coordinates in index order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..NUM_SQUARES as u8).map(Coord)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.column() as u8 + b'a') as char, self.rank())
    }
}

impl From<Coord> for u8 {
    fn from(coord: Coord) -> u8 {
        coord.0
    }
}

impl From<Coord> for usize {
    fn from(coord: Coord) -> usize {
        coord.index()
    }
}

impl TryFrom<u8> for Coord {
    type Error = CoordError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Coord::new(index as usize).ok_or(CoordError::OutOfRange {
            index: i64::from(index),
        })
    }
}

impl TryFrom<i32> for Coord {
    type Error = CoordError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .ok()
            .and_then(Coord::new)
            .ok_or(CoordError::OutOfRange {
                index: i64::from(index),
            })
    }
}

impl FromStr for Coord {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoordError::InvalidNotation {
            notation: s.to_string(),
        };

        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let column = match bytes[0] {
            b @ b'a'..=b'h' => (b - b'a') as usize,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b @ b'1'..=b'8' => (b - b'0') as usize,
            _ => return Err(invalid()),
        };

        Coord::from_column_row(column, ROW_LEN - rank).ok_or_else(invalid)
    }
}

//! Error types for board construction.
//!
//! Move generation itself never fails; these cover the input boundary where
//! coordinates and positions are parsed from outside data.

use std::fmt;

/// Error type for coordinate conversion failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// Linear index outside 0-63
    OutOfRange { index: i64 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::OutOfRange { index } => {
                write!(f, "Coordinate {index} out of bounds (must be 0-63)")
            }
            CoordError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for CoordError {}

/// Error type for FEN piece-placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Empty placement string
    Empty,
    /// Invalid piece character in placement string
    InvalidPiece { char: char },
    /// Placement does not describe exactly 8 ranks
    WrongRankCount { found: usize },
    /// A rank does not describe exactly 8 files
    WrongFileCount { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "Empty FEN string"),
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
        }
    }
}

impl std::error::Error for FenError {}

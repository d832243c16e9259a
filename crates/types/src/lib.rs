//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, harness protocol, benchmarks).
//!
//! # Board Dimensions
//!
//! The classic game is played on a 4x4 board, but the engine is generic over the
//! side length:
//!
//! - **Default size**: 4 (`DEFAULT_BOARD_SIZE`)
//! - **Supported sizes**: 2 through 16 (`MAX_BOARD_SIZE`)
//! - **Coordinates**: (col, row), 0-indexed, (0, 0) at the bottom-left corner
//!
//! # Winning Tile
//!
//! `MAX_PIECE` (2048) is the default winning tile value. A game ends when any
//! tile reaches it, or when no legal move remains.
//!
//! # Examples
//!
//! ```
//! use tilt_2048_types::{Direction, DEFAULT_BOARD_SIZE, MAX_PIECE};
//!
//! // Parse from string (case-insensitive)
//! let dir = Direction::from_str("up").unwrap();
//! assert_eq!(dir, Direction::Up);
//!
//! // Enumerate all four tilt directions
//! assert_eq!(Direction::all().len(), 4);
//!
//! assert_eq!(DEFAULT_BOARD_SIZE, 4);
//! assert_eq!(MAX_PIECE, 2048);
//! ```

/// Side length of the standard board
pub const DEFAULT_BOARD_SIZE: u8 = 4;

/// Largest supported board side length
///
/// Bounds the per-column scratch buffer used by the tilt engine, keeping the
/// hot path allocation-free.
pub const MAX_BOARD_SIZE: u8 = 16;

/// Smallest supported board side length
pub const MIN_BOARD_SIZE: u8 = 2;

/// Default winning tile value
pub const MAX_PIECE: Value = 2048;

/// Tile value (positive, power of two by convention; 0 is never a valid tile)
pub type Value = u32;

/// The four tilt directions
///
/// `Up` is the canonical direction: the board's viewing perspective rotates the
/// other three onto it so the merge pass is written once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "north" | "n" => Some(Direction::Up),
            "down" | "south" | "s" => Some(Direction::Down),
            "left" | "west" | "w" => Some(Direction::Left),
            "right" | "east" | "e" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Get all four directions
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_str() {
        assert_eq!(Direction::from_str("up"), Some(Direction::Up));
        assert_eq!(Direction::from_str("DOWN"), Some(Direction::Down));
        assert_eq!(Direction::from_str("w"), Some(Direction::Left));
        assert_eq!(Direction::from_str("east"), Some(Direction::Right));
        assert_eq!(Direction::from_str("diagonal"), None);
    }

    #[test]
    fn test_direction_round_trip() {
        for dir in Direction::all() {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
    }
}

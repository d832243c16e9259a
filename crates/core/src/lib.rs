//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 tilt/merge rules and state management. It has
//! **zero dependencies** on I/O, making it:
//!
//! - **Deterministic**: A game is a pure function of the tiles added and the
//!   tilts applied
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (harness, bench, headless)
//! - **Fast**: Allocation-free tilt hot path
//!
//! # Module Structure
//!
//! - [`board`]: N x N grid with a rotating viewing perspective
//! - [`tilt`]: directional compaction-and-merge pass
//! - [`rules`]: terminal-state predicates (winning tile, no moves left)
//! - [`game`]: score, best score, and game-over lifecycle
//! - [`snapshot`]: serializable observation of a whole game
//!
//! # Game Rules
//!
//! - Tilting slides every tile as far as it goes toward the chosen edge
//! - Adjacent equal tiles in the direction of motion merge into one tile of
//!   twice the value; the doubled value is added to the score
//! - A tile produced by a merge never merges again within the same tilt
//! - Three equal tiles in a line: the leading two merge, the trailing one stays
//! - The game ends when a tile reaches the winning value, or when the board is
//!   full with no equal orthogonal neighbors
//!
//! # Example
//!
//! ```
//! use tilt_2048_core::{Game, Tile};
//! use tilt_2048_types::Direction;
//!
//! let mut game = Game::new(4);
//! game.add_tile(Tile::new(2, 0, 0));
//! game.add_tile(Tile::new(2, 0, 2));
//!
//! // Both tiles slide up and merge into a 4.
//! assert!(game.tilt(Direction::Up));
//! assert_eq!(game.score(), 4);
//! assert_eq!(game.tile(0, 3).unwrap().value(), 4);
//! ```

pub mod board;
pub mod game;
pub mod rules;
pub mod snapshot;
pub mod tilt;

pub use tilt_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Tile};
pub use game::Game;
pub use rules::{at_least_one_move_exists, empty_space_exists, max_tile_exists};
pub use snapshot::GameSnapshot;
pub use tilt::{tilt_column, MergeStep, TiltOutcome};

//! Game module - ties the board, tilt engine, and rules together
//!
//! Owns the running score, the best score reached across game-over transitions,
//! and the game-over flag. The flag is recomputed after every mutation, never
//! set directly by callers.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board::{Board, Tile};
use crate::rules::{at_least_one_move_exists, max_tile_exists};
use crate::snapshot::GameSnapshot;
use crate::tilt;
use tilt_2048_types::{Direction, Value, MAX_PIECE};

/// A complete game: board plus score and terminal state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    score: u32,
    max_score: u32,
    game_over: bool,
    max_piece: Value,
}

impl Game {
    /// Create an empty game on a `size` x `size` board, winning at `MAX_PIECE`
    pub fn new(size: u8) -> Self {
        Self::with_max_piece(size, MAX_PIECE)
    }

    /// Create an empty game with a custom winning tile value
    pub fn with_max_piece(size: u8, max_piece: Value) -> Self {
        Self {
            board: Board::new(size),
            score: 0,
            max_score: 0,
            game_over: false,
            max_piece,
        }
    }

    /// Create a game from raw cell values, top row first, 0 meaning empty
    ///
    /// Rows are given in visual order so fixtures read like the board. Panics
    /// if the rows do not form a square within the supported size range.
    pub fn from_rows(rows: &[&[Value]], score: u32, max_score: u32) -> Self {
        let size = rows.len() as u8;
        let mut board = Board::new(size);
        for (i, cells) in rows.iter().enumerate() {
            assert!(
                cells.len() == size as usize,
                "row {} has {} cells on a board of size {}",
                i,
                cells.len(),
                size
            );
            let row = size - 1 - i as u8;
            for (col, &value) in cells.iter().enumerate() {
                if value != 0 {
                    board.add_tile(Tile::new(value, col as u8, row));
                }
            }
        }
        let mut game = Self {
            board,
            score,
            max_score,
            game_over: false,
            max_piece: MAX_PIECE,
        };
        game.evaluate_game_over();
        game
    }

    /// Get the side length of the board
    pub fn size(&self) -> u8 {
        self.board.size()
    }

    /// Get the tile at (col, row), or `None` for an empty cell
    pub fn tile(&self, col: u8, row: u8) -> Option<Tile> {
        self.board.tile(col, row)
    }

    /// Current score
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Best score reached at any game-over so far
    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    /// Whether the game has ended
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Read-only access to the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Add a tile to the board
    ///
    /// # Panics
    ///
    /// Panics if the target cell is already occupied.
    pub fn add_tile(&mut self, tile: Tile) {
        self.board.add_tile(tile);
        self.evaluate_game_over();
    }

    /// Tilt the board toward `direction`; returns whether anything changed
    ///
    /// Merges add twice the merged tile's value to the score. The board is
    /// always left in the canonical perspective.
    pub fn tilt(&mut self, direction: Direction) -> bool {
        let outcome = tilt::tilt(&mut self.board, direction);
        self.score += outcome.score_delta;
        self.evaluate_game_over();
        outcome.changed
    }

    /// Empty the board and reset score and game-over; `max_score` survives
    pub fn clear(&mut self) {
        self.score = 0;
        self.game_over = false;
        self.board.clear();
    }

    /// Serializable snapshot of the whole game
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::of(self)
    }

    /// Recompute the game-over flag from the board
    ///
    /// On entering the terminal state, the best score is carried forward.
    /// Idempotent: repeated evaluation without mutation changes nothing.
    fn evaluate_game_over(&mut self) {
        self.game_over =
            max_tile_exists(&self.board, self.max_piece) || !at_least_one_move_exists(&self.board);
        if self.game_over {
            self.max_score = self.max_score.max(self.score);
        }
    }
}

impl fmt::Display for Game {
    /// Debug rendering: rows top to bottom, cells right-aligned to width 4,
    /// trailer with score, best score, and over / not-over status
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "[")?;
        for row in (0..self.size()).rev() {
            for col in 0..self.size() {
                match self.tile(col, row) {
                    Some(tile) => write!(f, "|{:>4}", tile.value())?,
                    None => write!(f, "|    ")?,
                }
            }
            writeln!(f, "|")?;
        }
        let status = if self.game_over { "over" } else { "not over" };
        writeln!(
            f,
            "] {} (max: {}) (game is {})",
            self.score, self.max_score, status
        )
    }
}

/// Equality over the externally observable representation: two games are equal
/// iff they render identically (grid contents, score, best score, status).
impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Game {}

impl Hash for Game {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

//! Rules module - terminal-state predicates
//!
//! A game ends when a tile reaches the winning value, or when the board is full
//! and no two orthogonally adjacent tiles are equal. The adjacency scan checks
//! the right and upper neighbor of every cell, which covers each orthogonal
//! pair exactly once, corners included.

use crate::board::Board;
use tilt_2048_types::Value;

/// True if any cell on the board is empty
pub fn empty_space_exists(board: &Board) -> bool {
    let size = board.size();
    board.tiles().count() < size as usize * size as usize
}

/// True if any tile has reached the winning value
pub fn max_tile_exists(board: &Board, max_piece: Value) -> bool {
    board.tiles().any(|t| t.value() == max_piece)
}

/// True if at least one tilt could change the board
///
/// Either an empty cell exists, or some orthogonally adjacent pair of tiles is
/// equal and would merge.
pub fn at_least_one_move_exists(board: &Board) -> bool {
    if empty_space_exists(board) {
        return true;
    }
    let size = board.size();
    for row in 0..size {
        for col in 0..size {
            let value = board.tile(col, row).map(|t| t.value());
            if col + 1 < size && value == board.tile(col + 1, row).map(|t| t.value()) {
                return true;
            }
            if row + 1 < size && value == board.tile(col, row + 1).map(|t| t.value()) {
                return true;
            }
        }
    }
    false
}

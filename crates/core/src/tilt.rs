//! Tilt module - directional compaction and merging
//!
//! One merge pass, written for the canonical "up" direction; the board's
//! viewing perspective rotates the other three directions onto it. Each column
//! is processed independently with a single top-to-bottom reduction loop, so
//! the algorithm generalizes to any board size.
//!
//! Merge rules:
//!
//! - adjacent equal tiles in the direction of motion merge into one tile of
//!   twice the value, and the doubled value is added to the score;
//! - a tile produced by a merge never merges again within the same tilt;
//! - with three equal tiles in a line, the two leading ones merge and the
//!   trailing one stays.

use arrayvec::ArrayVec;

use crate::board::{Board, Tile};
use tilt_2048_types::{Direction, Value, MAX_BOARD_SIZE};

/// Outcome of comparing the next tile in scan order against the last placed one
///
/// Kept explicit so "already merged, cannot merge again" is a checkable state
/// rather than a side effect of cell overwrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStep {
    /// The tile slides into the next free row; no merge
    Slide,
    /// The tile merges into the last placed one
    Merged { value: Value, score_delta: u32 },
}

/// Result of compacting one column (or, via perspective, one row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TiltOutcome {
    /// Whether any tile moved or merged
    pub changed: bool,
    /// Total points earned from merges
    pub score_delta: u32,
}

impl TiltOutcome {
    fn absorb(&mut self, other: TiltOutcome) {
        self.changed |= other.changed;
        self.score_delta += other.score_delta;
    }
}

/// Decide whether `next` merges into a tile of value `placed`
fn merge_step(placed: Value, next: Value) -> MergeStep {
    if placed == next {
        let value = next * 2;
        MergeStep::Merged {
            value,
            score_delta: value,
        }
    } else {
        MergeStep::Slide
    }
}

/// Compact one viewed column toward the top row, merging as it goes
///
/// Scans occupied cells top-to-bottom, then reduces them in one pass: each tile
/// either merges into the previously placed tile (closing it to further merges)
/// or slides into the next free row and becomes the new merge candidate.
pub fn tilt_column(board: &mut Board, col: u8) -> TiltOutcome {
    let size = board.size();

    // Occupied cells, top to bottom. Bounded by the board size cap, so the
    // scratch never allocates.
    let mut occupied: ArrayVec<(u8, Tile), { MAX_BOARD_SIZE as usize }> = ArrayVec::new();
    for row in (0..size).rev() {
        if let Some(tile) = board.tile(col, row) {
            occupied.push((row, tile));
        }
    }

    let mut outcome = TiltOutcome::default();
    // Rows consumed so far; the next free destination is size - 1 - placed.
    let mut placed = 0u8;
    // Row and value of the last placed tile, while it is still open for merging.
    let mut open: Option<(u8, Value)> = None;

    for (orig_row, tile) in occupied {
        if let Some((placed_row, placed_value)) = open {
            if let MergeStep::Merged { value, score_delta } =
                merge_step(placed_value, tile.value())
            {
                // The merged result keeps the leading tile's cell and is
                // closed: the next tile starts a fresh destination below.
                board.move_tile(col, placed_row, Tile::new(value, tile.col(), tile.row()));
                outcome.changed = true;
                outcome.score_delta += score_delta;
                open = None;
                continue;
            }
        }
        let dest = size - 1 - placed;
        if orig_row != dest {
            board.move_tile(col, dest, tile);
            outcome.changed = true;
        }
        open = Some((dest, tile.value()));
        placed += 1;
    }

    outcome
}

/// Tilt the whole board toward `direction`
///
/// Rotates the viewing perspective so `direction` becomes "up", compacts every
/// column, and always restores the canonical perspective before returning.
pub fn tilt(board: &mut Board, direction: Direction) -> TiltOutcome {
    board.set_perspective(direction);

    let mut outcome = TiltOutcome::default();
    for col in 0..board.size() {
        outcome.absorb(tilt_column(board, col));
    }

    board.set_perspective(Direction::Up);
    outcome
}

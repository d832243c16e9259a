//! Board module - manages the game grid and its viewing perspective
//!
//! The board is an N x N grid where each cell is empty or holds a tile.
//! Uses a flat array for better cache locality.
//! Coordinates: (col, row) where (0, 0) is the bottom-left corner and row
//! increases upward.
//!
//! The board carries a *viewing perspective*: a coordinate remap that makes any
//! of the four tilt directions look like "up" to the caller. The remap is a pure
//! function of (col, row, direction, size); stored tiles never physically
//! rotate, and their recorded positions are always in the unrotated frame.

use tilt_2048_types::{Direction, Value, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// A numbered tile on the board
///
/// The value is immutable; a merge discards both inputs and places a fresh tile
/// of twice the value. Position is rewritten by [`Board::move_tile`] as the tile
/// slides, always in unrotated coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    value: Value,
    col: u8,
    row: u8,
}

impl Tile {
    /// Create a tile with the given value at (col, row)
    ///
    /// # Panics
    ///
    /// Panics if `value` is zero; empty cells are `None`, never a zero tile.
    pub fn new(value: Value, col: u8, row: u8) -> Self {
        assert!(value > 0, "tile value must be positive, got 0");
        Self { value, col, row }
    }

    pub fn value(&self) -> Value {
        self.value
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn row(&self) -> u8 {
        self.row
    }
}

/// The game board - N x N cells using flat array storage, plus a perspective
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    size: u8,
    /// Flat array of cells, row-major order (row * size + col), unrotated frame
    cells: Vec<Option<Tile>>,
    /// Current viewing perspective; `Up` is the identity
    perspective: Direction,
}

impl Board {
    /// Create a new empty board of the given side length
    ///
    /// # Panics
    ///
    /// Panics if `size` is outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    pub fn new(size: u8) -> Self {
        assert!(
            (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size),
            "board size {} outside supported range {}..={}",
            size,
            MIN_BOARD_SIZE,
            MAX_BOARD_SIZE
        );
        Self {
            size,
            cells: vec![None; size as usize * size as usize],
            perspective: Direction::Up,
        }
    }

    /// Get the side length of the board
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Remap viewed (col, row) to the unrotated frame under `perspective`
    ///
    /// The viewed frame is the board as seen with `perspective` rotated to the
    /// top: viewed row `size - 1` is the edge the current tilt compacts toward.
    fn unrotate(&self, col: u8, row: u8) -> (u8, u8) {
        let last = self.size - 1;
        match self.perspective {
            Direction::Up => (col, row),
            Direction::Down => (last - col, last - row),
            Direction::Right => (row, last - col),
            Direction::Left => (last - row, col),
        }
    }

    /// Calculate flat index from viewed (col, row) coordinates
    ///
    /// # Panics
    ///
    /// Panics on out-of-range coordinates; callers own bounds checking.
    fn index(&self, col: u8, row: u8) -> usize {
        assert!(
            col < self.size && row < self.size,
            "coordinates ({}, {}) out of range for board size {}",
            col,
            row,
            self.size
        );
        let (pc, pr) = self.unrotate(col, row);
        pr as usize * self.size as usize + pc as usize
    }

    /// Get the tile at viewed (col, row), or `None` for an empty cell
    pub fn tile(&self, col: u8, row: u8) -> Option<Tile> {
        self.cells[self.index(col, row)]
    }

    /// Add a tile to the board at its own recorded position
    ///
    /// The position is interpreted through the current perspective, like every
    /// other access.
    ///
    /// # Panics
    ///
    /// Panics if the target cell is already occupied.
    pub fn add_tile(&mut self, tile: Tile) {
        let idx = self.index(tile.col, tile.row);
        assert!(
            self.cells[idx].is_none(),
            "cell ({}, {}) already occupied",
            tile.col,
            tile.row
        );
        let (pc, pr) = self.unrotate(tile.col, tile.row);
        self.cells[idx] = Some(Tile {
            value: tile.value,
            col: pc,
            row: pr,
        });
    }

    /// Move `tile` to viewed (col, row), vacating its previous cell
    ///
    /// An existing occupant at the destination is discarded; the tilt engine
    /// realizes merges this way, passing in a fresh tile of doubled value whose
    /// recorded position is the merging tile's old cell.
    pub fn move_tile(&mut self, col: u8, row: u8, tile: Tile) {
        // The tile's recorded position is in the unrotated frame.
        let from = tile.row as usize * self.size as usize + tile.col as usize;
        let to = self.index(col, row);
        self.cells[from] = None;
        let (pc, pr) = self.unrotate(col, row);
        self.cells[to] = Some(Tile {
            value: tile.value,
            col: pc,
            row: pr,
        });
    }

    /// Set the viewing perspective
    ///
    /// Absolute, not cumulative: setting `Right` twice still views the board
    /// with the right edge at the top.
    pub fn set_perspective(&mut self, direction: Direction) {
        self.perspective = direction;
    }

    /// Current viewing perspective
    pub fn perspective(&self) -> Direction {
        self.perspective
    }

    /// Remove every tile from the board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Iterate over all occupied cells, in unrotated storage order
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().filter_map(|cell| *cell)
    }
}

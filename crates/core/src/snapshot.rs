//! Snapshot module - serializable observation of a whole game
//!
//! Consumed by the harness adapter; the wire shape is plain JSON-friendly data
//! with no tile objects, just values (0 = empty).

use serde::{Deserialize, Serialize};

use crate::game::Game;
use tilt_2048_types::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub size: u8,
    /// Cell values indexed `board[row][col]`, row 0 at the bottom, 0 = empty
    pub board: Vec<Vec<Value>>,
    pub score: u32,
    pub max_score: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn of(game: &Game) -> Self {
        let size = game.size();
        let board = (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| game.tile(col, row).map_or(0, |t| t.value()))
                    .collect()
            })
            .collect();
        Self {
            size,
            board,
            score: game.score(),
            max_score: game.max_score(),
            game_over: game.game_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Tile;

    #[test]
    fn test_snapshot_reflects_game() {
        let mut game = Game::new(4);
        game.add_tile(Tile::new(2, 1, 0));
        game.add_tile(Tile::new(4, 3, 2));

        let snap = game.snapshot();
        assert_eq!(snap.size, 4);
        assert_eq!(snap.board[0][1], 2);
        assert_eq!(snap.board[2][3], 4);
        assert_eq!(snap.board[0][0], 0);
        assert_eq!(snap.score, 0);
        assert!(!snap.game_over);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut game = Game::new(2);
        game.add_tile(Tile::new(2, 0, 1));

        let json = serde_json::to_string(&game.snapshot()).unwrap();
        assert_eq!(
            json,
            r#"{"size":2,"board":[[0,0],[2,0]],"score":0,"max_score":0,"game_over":false}"#
        );
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game.snapshot());
    }
}

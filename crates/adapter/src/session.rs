//! Session module - synchronous request handling over one game
//!
//! The session is the pure half of the adapter: a string-in, string-out handler
//! that the async stdio pump wraps. It validates every request up front so a
//! misbehaving harness gets a protocol error instead of tripping the engine's
//! contract panics.

use tilt_2048_core::{Game, Tile};
use tilt_2048_types::{Direction, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

use crate::protocol::{Request, Response};

/// One harness-driven game
#[derive(Debug)]
pub struct Session {
    game: Game,
}

impl Session {
    /// Start with an empty game of the standard size
    pub fn new() -> Self {
        Self {
            game: Game::new(DEFAULT_BOARD_SIZE),
        }
    }

    /// Read-only access to the underlying game
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Handle one request line, producing one response line (JSON, no newline)
    pub fn handle_line(&mut self, line: &str) -> String {
        let response = match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle(request),
            Err(err) => Response::error(format!("malformed request: {}", err)),
        };
        // Response serialization cannot fail: no maps with non-string keys.
        serde_json::to_string(&response).expect("response serialization")
    }

    /// Handle one parsed request
    pub fn handle(&mut self, request: Request) -> Response {
        match request {
            Request::New { size } => {
                if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
                    return Response::error(format!(
                        "size {} outside supported range {}..={}",
                        size, MIN_BOARD_SIZE, MAX_BOARD_SIZE
                    ));
                }
                self.game = Game::new(size);
                Response::state(self.game.snapshot())
            }
            Request::Add { col, row, value } => {
                let size = self.game.size();
                if col >= size || row >= size {
                    return Response::error(format!(
                        "cell ({}, {}) out of range for board size {}",
                        col, row, size
                    ));
                }
                if value == 0 {
                    return Response::error("tile value must be positive");
                }
                if self.game.tile(col, row).is_some() {
                    return Response::error(format!("cell ({}, {}) already occupied", col, row));
                }
                self.game.add_tile(Tile::new(value, col, row));
                Response::state(self.game.snapshot())
            }
            Request::Tilt { direction } => match Direction::from_str(&direction) {
                Some(dir) => {
                    let changed = self.game.tilt(dir);
                    Response::tilted(changed, self.game.snapshot())
                }
                None => Response::error(format!("unknown direction: {}", direction)),
            },
            Request::Query => Response::state(self.game.snapshot()),
            Request::Clear => {
                self.game.clear();
                Response::state(self.game.snapshot())
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

//! Protocol module - JSON message types for the harness adapter
//!
//! Implements a line-delimited JSON protocol: one request per line in, one
//! response per line out. Directions travel as strings so the wire format
//! stays readable from netcat or a shell script.

use serde::{Deserialize, Serialize};

use tilt_2048_core::GameSnapshot;
use tilt_2048_types::Value;

/// Harness -> engine request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    /// Replace the current game with an empty one of the given size
    New { size: u8 },
    /// Place a tile; fails if the cell is occupied or out of range
    Add { col: u8, row: u8, value: Value },
    /// Tilt toward a direction ("up", "down", "left", "right")
    Tilt { direction: String },
    /// Report the current state without mutating it
    Query,
    /// Empty the board and reset score and game-over
    Clear,
}

/// Engine -> harness response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    State {
        /// Present only for tilt responses
        #[serde(skip_serializing_if = "Option::is_none")]
        changed: Option<bool>,
        #[serde(flatten)]
        snapshot: GameSnapshot,
    },
    Error {
        message: String,
    },
}

impl Response {
    pub fn state(snapshot: GameSnapshot) -> Self {
        Response::State {
            changed: None,
            snapshot,
        }
    }

    pub fn tilted(changed: bool, snapshot: GameSnapshot) -> Self {
        Response::State {
            changed: Some(changed),
            snapshot,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Response::Error {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let req: Request = serde_json::from_str(r#"{"type":"tilt","direction":"up"}"#).unwrap();
        assert_eq!(
            req,
            Request::Tilt {
                direction: "up".to_string()
            }
        );

        let req: Request = serde_json::from_str(r#"{"type":"add","col":1,"row":2,"value":4}"#)
            .unwrap();
        assert_eq!(
            req,
            Request::Add {
                col: 1,
                row: 2,
                value: 4
            }
        );

        assert!(serde_json::from_str::<Request>(r#"{"type":"jump"}"#).is_err());
    }

    #[test]
    fn test_response_omits_changed_when_absent() {
        let snapshot = GameSnapshot {
            size: 2,
            board: vec![vec![0, 0], vec![0, 0]],
            score: 0,
            max_score: 0,
            game_over: false,
        };
        let json = serde_json::to_string(&Response::state(snapshot.clone())).unwrap();
        assert!(!json.contains("changed"));

        let json = serde_json::to_string(&Response::tilted(true, snapshot)).unwrap();
        assert!(json.contains(r#""changed":true"#));
    }
}

//! Adapter module - harness control via line-delimited JSON
//!
//! This module lets an external harness (test driver, AI loop, shell script)
//! drive the engine without linking against it. The protocol is one JSON
//! request per line on stdin, one JSON response per line on stdout.
//!
//! # Message Types
//!
//! ## Harness -> Engine
//!
//! - **new**: replace the current game with an empty one of a given size
//! - **add**: place a tile at (col, row)
//! - **tilt**: tilt toward "up", "down", "left", or "right"
//! - **query**: report the current state without mutating it
//! - **clear**: empty the board, reset score and game-over
//!
//! ## Engine -> Harness
//!
//! - **state**: full snapshot (board, score, max score, game over), plus
//!   `changed` on tilt responses
//! - **error**: malformed or out-of-contract request; the session survives and
//!   keeps serving
//!
//! # Example Protocol Flow
//!
//! ```text
//! Harness -> Engine: {"type":"add","col":0,"row":0,"value":2}
//! Engine -> Harness: {"type":"state","size":4,"board":[[2,0,0,0],...],"score":0,...}
//! Harness -> Engine: {"type":"tilt","direction":"up"}
//! Engine -> Harness: {"type":"state","changed":true,"size":4,...}
//! ```
//!
//! # Testing
//!
//! Drive the adapter from a shell for manual testing:
//!
//! ```bash
//! printf '%s\n' '{"type":"add","col":0,"row":0,"value":2}' '{"type":"tilt","direction":"up"}' | tilt-2048
//! ```

pub mod protocol;
pub mod server;
pub mod session;

pub use tilt_2048_core as core;
pub use tilt_2048_types as types;

pub use protocol::{Request, Response};
pub use server::{run, serve};
pub use session::Session;

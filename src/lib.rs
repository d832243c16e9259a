//! tilt-2048 (workspace facade crate).
//!
//! This package keeps a single `tilt_2048::{core,adapter,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use tilt_2048_adapter as adapter;
pub use tilt_2048_core as core;
pub use tilt_2048_types as types;

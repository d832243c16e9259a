//! Harness adapter runner (default binary).
//!
//! Serves the line-delimited JSON protocol over stdin/stdout until EOF.
//! Pair it with any driver that can speak one JSON object per line.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    tilt_2048::adapter::run().await
}

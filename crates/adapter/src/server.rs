//! Stdio server for the harness adapter
//!
//! Pumps line-delimited JSON between a reader/writer pair and a [`Session`].
//! Uses tokio so the default binary shares the runtime with any harness that
//! embeds it.

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::session::Session;

/// Serve one session over stdin/stdout until EOF
pub async fn run() -> Result<()> {
    serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}

/// Serve one session over an arbitrary reader/writer pair until EOF
///
/// Blank lines are ignored; every other line gets exactly one response line.
pub async fn serve<R, W>(reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = Session::new();
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut response = session.handle_line(line);
        response.push('\n');
        writer.write_all(response.as_bytes()).await?;
        writer.flush().await?;
    }

    Ok(())
}

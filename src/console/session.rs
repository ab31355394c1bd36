//! Console Session
//!
//! Reads commands line by line and writes one JSON reply per command.

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

use super::handlers::{dispatch, render, Reply};
use crate::cache::SharedCache;
use crate::models::{Command, ErrorResponse};

/// Runs a session until `QUIT` or end of input.
///
/// Command errors are reported to the writer as `{"error": ...}` and the
/// session continues; only I/O failures end it early.
///
/// # Returns
/// The number of commands handled, blank lines excluded.
pub async fn run_session<R, W>(cache: &SharedCache, reader: R, mut writer: W) -> anyhow::Result<u64>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut handled = 0u64;

    while let Some(line) = lines.next_line().await.context("reading command")? {
        let reply = match Command::parse(&line) {
            Ok(None) => continue,
            Ok(Some(command)) => dispatch(cache, command).await,
            Err(err) => Err(err),
        };
        handled += 1;

        let output = match reply {
            Ok(Reply::Quit) => {
                info!("Session ended by QUIT");
                break;
            }
            Ok(Reply::Line(output)) => output,
            Err(err) => {
                warn!("Command failed: {}", err);
                render(&ErrorResponse::new(err.to_string()))?
            }
        };

        writer.write_all(output.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    Ok(handled)
}

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use turnstile_order::receipt::render_guest_list;
use turnstile_order::TicketVerifier;

use colored::Colorize;
use crate::ticketing::{EXIT_FAILURE, EXIT_OK};

/// Prompt for one ticket id and print its guests.
///
/// Only a missing id is a failure exit; an unknown, expired or unreadable ticket is
/// reported and the run still exits cleanly.
pub async fn run<R, W, E>(
    input: R,
    out: &mut W,
    err: &mut E,
    verifier: &TicketVerifier,
) -> std::io::Result<u8>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    out.write_all("Enter the ticket id to verify: ".green().to_string().as_bytes()).await?;
    out.flush().await?;

    let line = input.lines().next_line().await?.unwrap_or_default();
    let ticket_id = line.trim();
    if ticket_id.is_empty() {
        err.write_all(format!("{}\n", "Please provide a ticket id".red()).as_bytes()).await?;
        err.flush().await?;
        return Ok(EXIT_FAILURE);
    }

    match verifier.verify(ticket_id).await {
        Ok(guests) => {
            out.write_all(format!("\n{}", render_guest_list(&guests)).as_bytes()).await?;
            out.flush().await?;
        }
        Err(e) => {
            tracing::warn!("Verification of {} failed: {}", ticket_id, e);
            err.write_all(format!("\n{}\n", e.user_message().red()).as_bytes()).await?;
            err.flush().await?;
        }
    }
    Ok(EXIT_OK)
}

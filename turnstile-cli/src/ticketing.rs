use chrono::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use turnstile_core::RecordStore;
use turnstile_order::{Intake, IssuedTicket};

use colored::Colorize;

/// Exit status of a driver run.
pub const EXIT_OK: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Drive one intake from `input` to a printed receipt.
///
/// Any bad line ends the run with `EXIT_FAILURE`; there is no retry. A failed save is only
/// logged, and the receipt is printed anyway.
pub async fn run<R, W, E>(
    input: R,
    out: &mut W,
    err: &mut E,
    store: &dyn RecordStore,
    validity: Duration,
) -> std::io::Result<u8>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    let mut intake = Intake::new().with_validity(validity);
    let mut lines = input.lines();

    while let Some(prompt) = intake.prompt() {
        out.write_all(prompt.green().to_string().as_bytes()).await?;
        out.flush().await?;

        let Some(line) = lines.next_line().await? else {
            fail(err, "Input closed before all guest details were entered").await?;
            return Ok(EXIT_FAILURE);
        };

        if let Err(e) = intake.feed(&line) {
            fail(err, &e.to_string()).await?;
            return Ok(EXIT_FAILURE);
        }
    }

    let Some(session) = intake.into_session() else {
        fail(err, "Guest intake did not complete").await?;
        return Ok(EXIT_FAILURE);
    };

    let issued: IssuedTicket = session.finalize(store).await;
    out.write_all(issued.render().as_bytes()).await?;
    out.flush().await?;
    Ok(EXIT_OK)
}

async fn fail<E: AsyncWrite + Unpin>(err: &mut E, message: &str) -> std::io::Result<()> {
    err.write_all(format!("\n{}\n", message.red()).as_bytes()).await?;
    err.flush().await
}

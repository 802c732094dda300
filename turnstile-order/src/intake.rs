use chrono::Duration;
use std::mem;
use std::num::NonZeroUsize;
use tracing::debug;
use turnstile_core::{GuestInput, GuestRecord, ValidationError};

use crate::session::{TicketSession, VALIDITY_WINDOW_HOURS};

#[derive(Debug)]
pub enum IntakeState {
    AwaitingCount,
    AwaitingGuest(TicketSession),
    Complete(TicketSession),
}

/// Line-by-line guest intake: a guest count, then one `name,age,phone,email,gender` line per guest.
///
/// Each line is fully validated before the next prompt is offered. A rejected line leaves
/// the state where it was.
#[derive(Debug)]
pub struct Intake {
    state: IntakeState,
    validity: Duration,
}

impl Intake {
    pub fn new() -> Self {
        Self {
            state: IntakeState::AwaitingCount,
            validity: Duration::hours(VALIDITY_WINDOW_HOURS),
        }
    }

    pub fn with_validity(mut self, validity: Duration) -> Self {
        self.validity = validity;
        self
    }

    pub fn state(&self) -> &IntakeState {
        &self.state
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state, IntakeState::Complete(_))
    }

    /// Prompt for the next line, or `None` once every guest is in.
    pub fn prompt(&self) -> Option<String> {
        match &self.state {
            IntakeState::AwaitingCount => Some("Enter the total number of guests: ".to_string()),
            IntakeState::AwaitingGuest(session) => Some(format!(
                "Enter guest {} details (name, age, phone, email, gender): ",
                session.guests().len() + 1
            )),
            IntakeState::Complete(_) => None,
        }
    }

    pub fn feed(&mut self, line: &str) -> Result<(), IntakeError> {
        match &mut self.state {
            IntakeState::AwaitingCount => {
                let count = parse_count(line)?;
                debug!("Expecting {} guest(s)", count);
                self.state = IntakeState::AwaitingGuest(
                    TicketSession::new(count).with_validity(self.validity),
                );
            }
            IntakeState::AwaitingGuest(session) => {
                let input = GuestInput::from_line(line).ok_or(IntakeError::MalformedLine)?;
                let guest = GuestRecord::validate(input)?;
                debug!("Guest {} accepted: {:?}", session.guests().len() + 1, guest);
                session.add_guest(guest);

                if session.is_full() {
                    if let IntakeState::AwaitingGuest(session) =
                        mem::replace(&mut self.state, IntakeState::AwaitingCount)
                    {
                        self.state = IntakeState::Complete(session);
                    }
                }
            }
            IntakeState::Complete(_) => return Err(IntakeError::AlreadyComplete),
        }
        Ok(())
    }

    /// The collected session, once every expected guest has been accepted.
    pub fn into_session(self) -> Option<TicketSession> {
        match self.state {
            IntakeState::Complete(session) => Some(session),
            _ => None,
        }
    }
}

impl Default for Intake {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_count(line: &str) -> Result<NonZeroUsize, IntakeError> {
    let trimmed = line.trim();
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| IntakeError::InvalidCount(trimmed.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("Invalid input. Please enter a valid number of guests.")]
    InvalidCount(String),

    #[error("Invalid input format. Please provide all details.")]
    MalformedLine,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("All guests have already been entered")]
    AlreadyComplete,
}

pub mod intake;
pub mod receipt;
pub mod session;
pub mod verifier;

pub use intake::{Intake, IntakeError, IntakeState};
pub use receipt::Table;
pub use session::{IssuedTicket, TicketSession, VALIDITY_WINDOW_HOURS};
pub use verifier::{TicketVerifier, VerifyError, INVALID_OR_EXPIRED};

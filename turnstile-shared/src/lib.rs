pub mod models;
pub mod pii;

pub use models::ticket::{GuestEntry, TicketRecord};
pub use pii::Masked;

pub mod fare;
pub mod guest;
pub mod rearrange;
pub mod repository;

pub use fare::FareCategory;
pub use guest::{Gender, GuestInput, GuestRecord, ValidationError, Violation};
pub use rearrange::Rearranger;
pub use repository::{RecordStore, StoreError};

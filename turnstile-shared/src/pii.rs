use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A wrapper for guest contact details that masks its value in Debug and Display output.
///
/// Serialization still writes the real value; the wrapper only guards against leaking
/// phone numbers and email addresses through `tracing::info!("{:?}", guest)` and friends.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Masked<T>(pub T);

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    /// Borrow the unmasked value. Call sites should be the ones that render it on purpose.
    pub fn expose(&self) -> &T {
        &self.0
    }
}

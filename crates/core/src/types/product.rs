//! Product identity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for a product variant.
///
/// A newtype over the product's string handle (e.g. `arcade-tshirt`) so
/// product ids cannot be mixed up with other strings. Cart identity is the
/// `(ProductId, Size)` pair, not the id alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product id from a handle.
    #[must_use]
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// The underlying handle.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(handle: &str) -> Self {
        Self(handle.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(handle: String) -> Self {
        Self(handle)
    }
}

//! Apparel sizes.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Size`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum SizeError {
    /// The input is not a known size code.
    #[error("unknown size: {0}")]
    Unknown(String),
}

/// An apparel size.
///
/// Serialized with the original lowercase wire codes (`"s"` .. `"xxl"`);
/// each product offers a subset of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    S,
    M,
    L,
    Xl,
    Xxl,
}

impl Size {
    /// All sizes, smallest first.
    pub const ALL: [Self; 5] = [Self::S, Self::M, Self::L, Self::Xl, Self::Xxl];

    /// The lowercase wire code (`"s"`, `"m"`, ...).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::S => "s",
            Self::M => "m",
            Self::L => "l",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
        }
    }

    /// The upper-cased label used in order messages (`"M"`, `"XXL"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::Xl => "XL",
            Self::Xxl => "XXL",
        }
    }

    /// Parse a size code, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`SizeError::Unknown`] if the input is not one of the five
    /// size codes.
    pub fn parse(s: &str) -> Result<Self, SizeError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" => Ok(Self::S),
            "m" => Ok(Self::M),
            "l" => Ok(Self::L),
            "xl" => Ok(Self::Xl),
            "xxl" => Ok(Self::Xxl),
            other => Err(SizeError::Unknown(other.to_owned())),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Size {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

//! Display locales.

use serde::{Deserialize, Serialize};

/// The two display languages the store supports.
///
/// The surrounding UI owns language switching; the engine only receives the
/// selected locale and picks pre-supplied strings with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Egyptian Arabic.
    Ar,
}

impl Locale {
    /// Whether this locale is rendered right-to-left.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rtl() {
        assert!(Locale::Ar.is_rtl());
        assert!(!Locale::En.is_rtl());
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::default(), Locale::En);
    }
}

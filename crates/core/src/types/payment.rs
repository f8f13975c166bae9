//! Payment methods.

use serde::{Deserialize, Serialize};

/// How the customer pays for the order.
///
/// The store takes no payment online; both methods settle outside the
/// checkout flow. Wire values (`"cash"` / `"instapay"`) match the original
/// form field so saved drafts stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Pay the courier on delivery.
    #[default]
    Cash,
    /// Instant bank transfer via InstaPay.
    Instapay,
}

impl PaymentMethod {
    /// Human label for order messages, per locale direction.
    #[must_use]
    pub const fn label(self, arabic: bool) -> &'static str {
        match (self, arabic) {
            (Self::Cash, false) => "💵 Cash on Delivery",
            (Self::Cash, true) => "💵 الدفع عند الاستلام",
            (Self::Instapay, false) => "📱 InstaPay",
            (Self::Instapay, true) => "📱 انستاباي (InstaPay)",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Cash).unwrap(),
            "\"cash\""
        );
        let m: PaymentMethod = serde_json::from_str("\"instapay\"").unwrap();
        assert_eq!(m, PaymentMethod::Instapay);
    }

    #[test]
    fn test_default_is_cash() {
        assert_eq!(PaymentMethod::default(), PaymentMethod::Cash);
    }

    #[test]
    fn test_labels() {
        assert_eq!(PaymentMethod::Cash.label(false), "💵 Cash on Delivery");
        assert_eq!(PaymentMethod::Instapay.label(true), "📱 انستاباي (InstaPay)");
    }
}

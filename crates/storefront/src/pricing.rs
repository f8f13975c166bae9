//! Pure pricing rules: coupon discount and delivery fee.
//!
//! Nothing in here holds state. The cart store calls these with its current
//! totals, so a coupon applied before a cart mutation is re-priced against
//! the new subtotal automatically.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use morshd_core::Money;

use crate::config::DeliveryPolicy;

/// City markers that qualify for the low delivery fee, in both supported
/// spellings. Matching is case-insensitive and substring-based, so
/// "Tanta - El Gharbiya" still qualifies.
const LOW_FEE_CITY_EN: &str = "tanta";
const LOW_FEE_CITY_AR: &str = "طنطا";

/// Everything derived from the cart plus the shipping city, computed in one
/// place so the UI and the order formatter agree on every number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingBreakdown {
    /// Sum of line quantities.
    pub total_items: u32,
    /// Sum of unit price x quantity over all lines.
    pub subtotal: Money,
    /// Coupon discount; zero when no coupon is applied.
    pub discount: Money,
    /// Subtotal minus discount.
    pub final_price: Money,
    /// Flat delivery fee for the entered city.
    pub delivery_fee: Money,
    /// Final price plus delivery fee.
    pub grand_total: Money,
}

/// Compute the coupon discount on a subtotal.
///
/// Returns zero when no coupon is applied; otherwise rounds
/// `subtotal x rate` to the nearest whole pound, half away from zero.
#[must_use]
pub fn discount_amount(subtotal: Money, applied: bool, rate_percent: u8) -> Money {
    if !applied {
        return Money::ZERO;
    }
    let exact = Decimal::from(subtotal.amount()) * Decimal::from(rate_percent) / Decimal::from(100u8);
    let rounded = exact.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    Money::new(rounded.to_u64().unwrap_or(0))
}

/// Compute the flat delivery fee for a city.
///
/// The low fee applies when the city contains the designated marker in
/// either spelling; everything else, including an empty city, pays the high
/// fee. With `policy.free_multi_item` enabled, carts holding more than one
/// item ship free.
#[must_use]
pub fn delivery_fee(city: &str, total_items: u32, policy: &DeliveryPolicy) -> Money {
    if policy.free_multi_item && total_items > 1 {
        return Money::ZERO;
    }

    let normalized = city.trim();
    if normalized.is_empty() {
        return policy.high_fee;
    }

    let is_low_fee_city = normalized.to_lowercase().contains(LOW_FEE_CITY_EN)
        || normalized.contains(LOW_FEE_CITY_AR);
    if is_low_fee_city {
        policy.low_fee
    } else {
        policy.high_fee
    }
}

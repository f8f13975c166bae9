//! The cart store: line items, coupon state, and derived totals.
//!
//! Line identity is the `(product_id, size)` pair - adding the same pair
//! again bumps the quantity instead of creating a duplicate line. Every
//! derived value is recomputed on read; nothing is cached, so the coupon
//! discount always tracks the current subtotal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use morshd_core::{Locale, Money, ProductId, Size};

use crate::config::{CouponConfig, StoreConfig};
use crate::pricing::{self, PricingBreakdown};

/// One `(product, size)` pairing with a quantity in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product variant this line refers to.
    pub product_id: ProductId,
    /// English display name.
    pub name: String,
    /// Arabic display name.
    pub name_ar: String,
    /// Selected apparel size.
    pub size: Size,
    /// Price per unit in whole EGP.
    pub unit_price: Money,
    /// Always at least 1; a line at 0 is removed, never stored.
    pub quantity: u32,
    /// Opaque reference to the display asset.
    pub image: String,
}

impl CartLine {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }

    /// Display name in the requested locale.
    #[must_use]
    pub fn display_name(&self, locale: Locale) -> &str {
        if locale.is_rtl() { &self.name_ar } else { &self.name }
    }

    fn matches(&self, product_id: &ProductId, size: Size) -> bool {
        self.product_id == *product_id && self.size == size
    }
}

/// Coupon application failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CouponError {
    /// The entered code does not match the configured valid code.
    ///
    /// Cart state is untouched; callers surface this as a transient,
    /// self-clearing indication next to the input.
    #[error("invalid coupon code")]
    Invalid,
}

/// The shopping cart.
///
/// Owned by the checkout session and mutated only through its own
/// operations. Insertion order of lines is display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartStore {
    lines: Vec<CartLine>,
    coupon_input: String,
    coupon_applied: bool,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of an item.
    ///
    /// If a line with the same `(product_id, size)` already exists its
    /// quantity is incremented by 1 and the incoming line's own quantity is
    /// ignored; otherwise the item is appended as a new line with
    /// quantity 1. Always succeeds.
    pub fn add(&mut self, item: CartLine) {
        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|line| line.matches(&item.product_id, item.size))
        {
            existing.quantity += 1;
            tracing::debug!(
                product = %item.product_id,
                size = item.size.code(),
                quantity = existing.quantity,
                "incremented cart line"
            );
        } else {
            tracing::debug!(product = %item.product_id, size = item.size.code(), "added cart line");
            self.lines.push(CartLine { quantity: 1, ..item });
        }
    }

    /// Remove the matching line. A no-op when absent.
    pub fn remove(&mut self, product_id: &ProductId, size: Size) {
        self.lines.retain(|line| !line.matches(product_id, size));
        tracing::debug!(product = %product_id, size = size.code(), "removed cart line");
    }

    /// Replace the matching line's quantity; `0` behaves as [`Self::remove`].
    ///
    /// A no-op when no line matches.
    pub fn set_quantity(&mut self, product_id: &ProductId, size: Size, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id, size);
            return;
        }
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.matches(product_id, size))
        {
            line.quantity = quantity;
            tracing::debug!(product = %product_id, size = size.code(), quantity, "set cart quantity");
        }
    }

    /// Empty the cart. Coupon state is kept; with nothing to discount it
    /// simply computes to zero.
    pub fn clear(&mut self) {
        self.lines.clear();
        tracing::debug!("cleared cart");
    }

    // =========================================================================
    // Coupon
    // =========================================================================

    /// Store raw coupon input, upper-cased by convention. Not validated.
    pub fn set_coupon_input(&mut self, text: &str) {
        self.coupon_input = text.to_uppercase();
    }

    /// The raw coupon input as currently stored.
    #[must_use]
    pub fn coupon_input(&self) -> &str {
        &self.coupon_input
    }

    /// Whether a coupon has been successfully applied.
    #[must_use]
    pub const fn coupon_applied(&self) -> bool {
        self.coupon_applied
    }

    /// Validate the entered code against the configured coupon.
    ///
    /// # Errors
    ///
    /// Returns [`CouponError::Invalid`] on mismatch, leaving all state
    /// unchanged.
    pub fn apply_coupon(&mut self, coupon: &CouponConfig) -> Result<(), CouponError> {
        if self.coupon_input.trim().eq_ignore_ascii_case(&coupon.code) {
            self.coupon_applied = true;
            tracing::debug!(code = %coupon.code, "applied coupon");
            Ok(())
        } else {
            Err(CouponError::Invalid)
        }
    }

    /// Clear both the applied flag and the stored input.
    pub fn remove_coupon(&mut self) {
        self.coupon_applied = false;
        self.coupon_input.clear();
        tracing::debug!("removed coupon");
    }

    // =========================================================================
    // Derived totals (pure, recomputed on every read)
    // =========================================================================

    /// Sum of line quantities.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of `unit_price x quantity` over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Coupon discount against the current subtotal.
    #[must_use]
    pub fn discount(&self, coupon: &CouponConfig) -> Money {
        pricing::discount_amount(self.subtotal(), self.coupon_applied, coupon.rate_percent)
    }

    /// Subtotal minus discount.
    #[must_use]
    pub fn final_price(&self, coupon: &CouponConfig) -> Money {
        self.subtotal() - self.discount(coupon)
    }

    /// Full pricing snapshot for the entered city.
    #[must_use]
    pub fn pricing(&self, city: &str, config: &StoreConfig) -> PricingBreakdown {
        let total_items = self.total_items();
        let subtotal = self.subtotal();
        let discount = self.discount(&config.coupon);
        let final_price = subtotal - discount;
        let delivery_fee = pricing::delivery_fee(city, total_items, &config.delivery);
        PricingBreakdown {
            total_items,
            subtotal,
            discount,
            final_price,
            delivery_fee,
            grand_total: final_price + delivery_fee,
        }
    }
}

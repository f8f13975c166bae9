//! Morsh-D storefront engine.
//!
//! The state engine behind the single-product Morsh-D store: cart line
//! items and derived totals, coupon discounts, delivery fees by city,
//! shipping-form validation, session draft persistence, and the order
//! formatter that turns a checkout into a prefilled WhatsApp message.
//!
//! There is no server in here. The surrounding UI owns rendering and
//! language switching; it constructs a [`session::CheckoutSession`], feeds
//! user actions into it, and opens the deep link the session hands back.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod draft;
pub mod geo;
pub mod order;
pub mod pricing;
pub mod session;

pub use cart::{CartLine, CartStore, CouponError};
pub use checkout::{Field, FieldErrors, ShippingForm, validate};
pub use config::{ConfigError, StoreConfig};
pub use draft::{DRAFT_STORAGE_KEY, DraftStore, MemoryDraftStore};
pub use pricing::PricingBreakdown;
pub use session::{CheckoutError, CheckoutSession, OrderHandoff};

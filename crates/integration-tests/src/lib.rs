//! End-to-end tests for the Morsh-D storefront engine.
//!
//! The engine is a pure state machine, so these tests run in-process with
//! no external services: a [`morshd_storefront::CheckoutSession`] over a
//! `MemoryDraftStore` stands in for a full browsing session.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p morshd-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `checkout_flow` - Cart to order-message journeys, with and without a coupon
//! - `draft_persistence` - Form drafts surviving simulated reloads
//! - `order_message` - Golden assertions on the generated order text

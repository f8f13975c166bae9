//! The checkout session: the one object the UI owns.
//!
//! There is no global cart. The application constructs a
//! [`CheckoutSession`] at startup, passes it to whichever component needs
//! it, and every mutation goes through here. Form edits persist the draft
//! as a side effect; checkout gates on the cart and the validator before
//! producing the outbound message.

use thiserror::Error;

use morshd_core::Locale;

use crate::cart::CartStore;
use crate::checkout::{FieldErrors, ShippingForm, validate};
use crate::config::StoreConfig;
use crate::draft::{self, DraftStore};
use crate::order::{self, AppliedCoupon};

/// Why a checkout attempt produced no order.
#[derive(Debug, Clone, Error)]
pub enum CheckoutError {
    /// Nothing in the cart. Callers treat this as a silent no-op.
    #[error("cart is empty")]
    EmptyCart,

    /// The shipping form failed validation; submission stays blocked until
    /// the error set is empty.
    #[error("shipping form has {} invalid field(s)", .0.len())]
    InvalidForm(FieldErrors),
}

/// The composed order, ready to hand to the messaging collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderHandoff {
    /// The full order text.
    pub message: String,
    /// `wa.me` deep link with the message percent-encoded into it.
    pub whatsapp_url: String,
}

/// Owns the cart, the shipping form, and their configuration for one
/// browsing session.
#[derive(Debug)]
pub struct CheckoutSession<S: DraftStore> {
    config: StoreConfig,
    cart: CartStore,
    form: ShippingForm,
    drafts: S,
}

impl<S: DraftStore> CheckoutSession<S> {
    /// Start a session: empty cart, shipping form restored from any saved
    /// draft.
    pub fn new(config: StoreConfig, drafts: S) -> Self {
        let form = draft::load_draft(&drafts);
        Self {
            config,
            cart: CartStore::new(),
            form,
            drafts,
        }
    }

    /// The session configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The cart, read-only.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The cart, for mutations coming from UI events.
    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// The shipping form, read-only.
    #[must_use]
    pub const fn form(&self) -> &ShippingForm {
        &self.form
    }

    /// Tear down the session and hand back its draft store.
    ///
    /// Lets tests rebuild a session over the same store to model a page
    /// reload: the draft survives, in-memory cart state does not.
    #[must_use]
    pub fn into_draft_store(self) -> S {
        self.drafts
    }

    /// Apply a form edit and persist the draft afterwards.
    ///
    /// All field changes go through here so the draft never lags the form.
    pub fn update_form(&mut self, edit: impl FnOnce(&mut ShippingForm)) {
        edit(&mut self.form);
        draft::save_draft(&mut self.drafts, &self.form);
    }

    /// Reset the form to defaults and drop the stored draft.
    pub fn reset_form(&mut self) {
        self.form.reset();
        draft::clear_draft(&mut self.drafts);
    }

    /// Validate the current form without attempting checkout.
    #[must_use]
    pub fn validate_form(&self, locale: Locale) -> FieldErrors {
        validate(&self.form, locale)
    }

    /// Attempt checkout.
    ///
    /// On success the order message and deep link are returned and the cart
    /// is cleared; the form (and its draft) survive for the next order.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::EmptyCart`] when there is nothing to order (no
    /// message is generated), or [`CheckoutError::InvalidForm`] carrying
    /// the per-field errors.
    pub fn checkout(&mut self, locale: Locale) -> Result<OrderHandoff, CheckoutError> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let errors = validate(&self.form, locale);
        if !errors.is_empty() {
            return Err(CheckoutError::InvalidForm(errors));
        }

        let pricing = self.cart.pricing(&self.form.city, &self.config);
        let coupon = self.cart.coupon_applied().then(|| AppliedCoupon {
            code: &self.config.coupon.code,
            rate_percent: self.config.coupon.rate_percent,
        });

        let message = order::format_order(self.cart.lines(), &self.form, &pricing, coupon, locale);
        let whatsapp_url = order::whatsapp_url(&self.config.whatsapp_number, &message);

        tracing::info!(
            items = pricing.total_items,
            grand_total = %pricing.grand_total,
            "order composed, clearing cart"
        );
        self.cart.clear();

        Ok(OrderHandoff {
            message,
            whatsapp_url,
        })
    }
}

//! Shipping form and its validator.
//!
//! The form is mutated field by field as the customer types; the validator
//! runs every rule in one pass and returns the full error set, so the UI
//! can mark all offending fields at once.

pub mod form;
pub mod validate;

pub use form::ShippingForm;
pub use validate::{Field, FieldErrors, validate};

//! Core types for the Morsh-D storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod locale;
pub mod money;
pub mod payment;
pub mod product;
pub mod size;

pub use email::{Email, EmailError};
pub use locale::Locale;
pub use money::Money;
pub use payment::PaymentMethod;
pub use product::ProductId;
pub use size::{Size, SizeError};

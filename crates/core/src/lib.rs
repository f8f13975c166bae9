//! Morsh-D Core - Shared types library.
//!
//! This crate provides the domain types used across the Morsh-D storefront
//! engine:
//! - `storefront` - cart, pricing, checkout and order formatting
//! - integration tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Money, product identity, sizes, payment methods, locales
//!   and validated email addresses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

//! Session draft persistence for the shipping form.
//!
//! The form is saved after every field change and restored on the next
//! page load within the same browsing session. The backing store is
//! whatever the embedding UI provides (session storage in the browser, a
//! map in tests); the engine only sees the [`DraftStore`] trait.
//!
//! Failures never surface: an unavailable store or a corrupt draft reads
//! as "no draft", and a failed save is skipped. Checkout must keep working
//! with persistence gone.

use thiserror::Error;

use crate::checkout::ShippingForm;

/// Storage key under which the draft is kept.
pub const DRAFT_STORAGE_KEY: &str = "morsh-d-checkout-form";

/// The backing store rejected or cannot service the operation.
#[derive(Debug, Clone, Copy, Error)]
#[error("draft store unavailable")]
pub struct StoreUnavailable;

/// Session-scoped key-value storage for the draft.
pub trait DraftStore {
    /// Read the stored value for a key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreUnavailable`] when the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreUnavailable>;

    /// Write a value for a key, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreUnavailable`] when the store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreUnavailable>;

    /// Remove a key. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreUnavailable`] when the store cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StoreUnavailable>;
}

/// In-memory [`DraftStore`], used in tests and non-browser embeddings.
#[derive(Debug, Clone, Default)]
pub struct MemoryDraftStore {
    entries: std::collections::HashMap<String, String>,
}

impl MemoryDraftStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for MemoryDraftStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreUnavailable> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreUnavailable> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreUnavailable> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Restore the draft, falling back to a fresh form.
///
/// A missing draft, an unreadable store, or malformed JSON all produce
/// [`ShippingForm::new`]; a partial draft merges with field defaults via
/// serde.
#[must_use]
pub fn load_draft(store: &dyn DraftStore) -> ShippingForm {
    let raw = match store.get(DRAFT_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return ShippingForm::new(),
        Err(e) => {
            tracing::warn!(error = %e, "could not read draft store, using defaults");
            return ShippingForm::new();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "stored draft is malformed, using defaults");
        ShippingForm::new()
    })
}

/// Persist the full form. Fire-and-forget: failures are logged and skipped.
pub fn save_draft(store: &mut dyn DraftStore, form: &ShippingForm) {
    let json = match serde_json::to_string(form) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(error = %e, "could not serialize draft");
            return;
        }
    };
    if let Err(e) = store.set(DRAFT_STORAGE_KEY, &json) {
        tracing::warn!(error = %e, "could not save draft, skipping");
    }
}

/// Remove the stored draft. Failures are logged and skipped.
pub fn clear_draft(store: &mut dyn DraftStore) {
    if let Err(e) = store.remove(DRAFT_STORAGE_KEY) {
        tracing::warn!(error = %e, "could not clear draft");
    }
}

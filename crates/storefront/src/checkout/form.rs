//! The shipping form record.

use serde::{Deserialize, Serialize};

use morshd_core::PaymentMethod;

use crate::geo::{self, LocalizedName};

/// The in-progress shipping form.
///
/// Serialized field names match the original browser draft
/// (`firstName`, ..., `apartment`), so drafts written by earlier versions
/// of the store restore cleanly. Every field has a default and the record
/// tolerates missing fields, which is what lets a partial draft merge with
/// defaults on load.
///
/// The country is not a field: the store serves Egypt only, so it is
/// exposed read-only via [`ShippingForm::country`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingForm {
    /// Customer first name. Required.
    pub first_name: String,
    /// Customer last name. Required.
    pub last_name: String,
    /// Contact email. Optional; validated only when non-empty.
    pub email: String,
    /// Contact phone. Required.
    pub phone: String,
    /// Selected governorate (English name from [`geo::GOVERNORATES`]).
    pub governorate: String,
    /// Selected city within the governorate.
    pub city: String,
    /// Detailed address: apartment, building, street.
    #[serde(rename = "apartment")]
    pub address: String,
    /// Chosen payment method. Defaults to cash on delivery; `None` means
    /// the customer explicitly deselected it (the `""` wire value).
    #[serde(with = "payment_method_wire")]
    pub payment_method: Option<PaymentMethod>,
}

/// The hard defaults, also the serde merge base for partial drafts: a
/// draft that never mentions `paymentMethod` restores to cash on
/// delivery, same as a fresh form.
impl Default for ShippingForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            governorate: String::new(),
            city: String::new(),
            address: String::new(),
            payment_method: Some(PaymentMethod::Cash),
        }
    }
}

impl ShippingForm {
    /// A fresh form with the hard defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed country the store ships to.
    #[must_use]
    pub const fn country() -> LocalizedName {
        geo::COUNTRY
    }

    /// Select a governorate.
    ///
    /// Always clears the city in the same update: the previous city cannot
    /// be assumed valid for the new governorate's set.
    pub fn set_governorate(&mut self, governorate: impl Into<String>) {
        let governorate = governorate.into();
        if self.governorate != governorate {
            self.city.clear();
        }
        self.governorate = governorate;
    }

    /// Whether any of the identifying fields hold data, i.e. a restored
    /// draft is worth telling the customer about.
    #[must_use]
    pub fn has_saved_data(&self) -> bool {
        !self.first_name.is_empty() || !self.last_name.is_empty() || !self.phone.is_empty()
    }

    /// Reset every field to the defaults of a fresh form.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Wire format for the payment method: the original draft stores `"cash"` /
/// `"instapay"` and may hold an empty string for "unset".
mod payment_method_wire {
    use super::PaymentMethod;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<PaymentMethod>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(PaymentMethod::Cash) => serializer.serialize_str("cash"),
            Some(PaymentMethod::Instapay) => serializer.serialize_str("instapay"),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<PaymentMethod>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "cash" => Some(PaymentMethod::Cash),
            "instapay" => Some(PaymentMethod::Instapay),
            _ => None,
        })
    }
}

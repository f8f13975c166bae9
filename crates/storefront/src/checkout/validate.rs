//! Shipping form validation.

use std::collections::BTreeMap;

use serde::Serialize;

use morshd_core::{Email, Locale};

use super::form::ShippingForm;

/// Minimum number of characters in a phone number.
const PHONE_MIN_LEN: usize = 10;

/// A shipping form field, used to key validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Governorate,
    City,
    Address,
    PaymentMethod,
}

impl Field {
    /// The camelCase key the UI uses to attach an error to its input.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Governorate => "governorate",
            Self::City => "city",
            Self::Address => "apartment",
            Self::PaymentMethod => "paymentMethod",
        }
    }
}

/// Validation errors keyed by field, with localized messages.
///
/// Empty means the form is valid. A `BTreeMap` keeps iteration order
/// stable for rendering and testing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    /// Whether the form passed every check.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The message for one field, if it failed.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Iterate over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: Field, en: &str, ar: &str, locale: Locale) {
        let message = if locale.is_rtl() { ar } else { en };
        self.0.insert(field, message.to_owned());
    }
}

/// Run every per-field check and collect all errors in one pass.
///
/// No short-circuiting: a form with three problems reports three errors.
/// Pure and idempotent - validating the same form twice yields the same
/// error set and changes nothing.
#[must_use]
pub fn validate(form: &ShippingForm, locale: Locale) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if form.first_name.trim().is_empty() {
        errors.insert(
            Field::FirstName,
            "First name is required",
            "الاسم الأول مطلوب",
            locale,
        );
    }

    if form.last_name.trim().is_empty() {
        errors.insert(
            Field::LastName,
            "Last name is required",
            "الاسم الأخير مطلوب",
            locale,
        );
    }

    if !form.email.is_empty() && Email::parse(&form.email).is_err() {
        errors.insert(
            Field::Email,
            "Invalid email",
            "البريد الإلكتروني غير صالح",
            locale,
        );
    }

    if form.phone.trim().is_empty() {
        errors.insert(
            Field::Phone,
            "Phone number is required",
            "رقم الهاتف مطلوب",
            locale,
        );
    } else if !is_valid_phone(&form.phone) {
        errors.insert(
            Field::Phone,
            "Invalid phone number",
            "رقم هاتف غير صالح",
            locale,
        );
    }

    if form.governorate.is_empty() {
        errors.insert(
            Field::Governorate,
            "Governorate is required",
            "المحافظة مطلوبة",
            locale,
        );
    }

    if form.city.trim().is_empty() {
        errors.insert(Field::City, "City is required", "المدينة مطلوبة", locale);
    }

    if form.address.trim().is_empty() {
        errors.insert(
            Field::Address,
            "Address is required",
            "العنوان مطلوب",
            locale,
        );
    }

    if form.payment_method.is_none() {
        errors.insert(
            Field::PaymentMethod,
            "Payment method is required",
            "طريقة الدفع مطلوبة",
            locale,
        );
    }

    errors
}

/// At least [`PHONE_MIN_LEN`] characters, all drawn from digits, whitespace,
/// `+`, `-` and parentheses.
fn is_valid_phone(phone: &str) -> bool {
    phone.chars().count() >= PHONE_MIN_LEN
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_whitespace() || matches!(c, '+' | '-' | '(' | ')'))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use morshd_core::PaymentMethod;

    fn filled_form() -> ShippingForm {
        let mut form = ShippingForm::new();
        form.first_name = "Omar".to_owned();
        form.last_name = "Hassan".to_owned();
        form.email = "omar@example.com".to_owned();
        form.phone = "01012345678".to_owned();
        form.set_governorate("Gharbiya");
        form.city = "Tanta".to_owned();
        form.address = "12 El Galaa St, Apt 3".to_owned();
        form.payment_method = Some(PaymentMethod::Cash);
        form
    }

    #[test]
    fn test_valid_form_no_errors() {
        assert!(validate(&filled_form(), Locale::En).is_empty());
    }

    #[test]
    fn test_all_errors_collected_in_one_pass() {
        let form = ShippingForm {
            payment_method: None,
            ..ShippingForm::default()
        };
        let errors = validate(&form, Locale::En);
        // Everything required is missing; email is optional and absent
        assert_eq!(errors.len(), 7);
        assert!(errors.get(Field::Email).is_none());
    }

    #[test]
    fn test_names_whitespace_only_rejected() {
        let mut form = filled_form();
        form.first_name = "   ".to_owned();
        let errors = validate(&form, Locale::En);
        assert_eq!(errors.get(Field::FirstName), Some("First name is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_email_optional() {
        let mut form = filled_form();
        form.email = String::new();
        assert!(validate(&form, Locale::En).is_empty());
    }

    #[test]
    fn test_email_shape_checked_when_present() {
        let mut form = filled_form();
        form.email = "not-an-email".to_owned();
        let errors = validate(&form, Locale::En);
        assert_eq!(errors.get(Field::Email), Some("Invalid email"));
    }

    #[test]
    fn test_phone_too_short() {
        let mut form = filled_form();
        form.phone = "0101234".to_owned();
        let errors = validate(&form, Locale::En);
        assert_eq!(errors.get(Field::Phone), Some("Invalid phone number"));
    }

    #[test]
    fn test_phone_allows_symbols() {
        let mut form = filled_form();
        form.phone = "+20 (10) 1234-5678".to_owned();
        assert!(validate(&form, Locale::En).is_empty());
    }

    #[test]
    fn test_phone_rejects_letters() {
        let mut form = filled_form();
        form.phone = "01012345678x".to_owned();
        let errors = validate(&form, Locale::En);
        assert_eq!(errors.get(Field::Phone), Some("Invalid phone number"));
    }

    #[test]
    fn test_only_payment_method_unset() {
        let mut form = filled_form();
        form.payment_method = None;
        let errors = validate(&form, Locale::En);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::PaymentMethod),
            Some("Payment method is required")
        );
    }

    #[test]
    fn test_arabic_messages() {
        let form = ShippingForm::default();
        let errors = validate(&form, Locale::Ar);
        assert_eq!(errors.get(Field::FirstName), Some("الاسم الأول مطلوب"));
        assert_eq!(errors.get(Field::PaymentMethod), Some("طريقة الدفع مطلوبة"));
    }

    #[test]
    fn test_idempotent() {
        let mut form = filled_form();
        form.city.clear();
        let first = validate(&form, Locale::En);
        let second = validate(&form, Locale::En);
        assert_eq!(first, second);
    }

    #[test]
    fn test_error_keys_match_form_wire_names() {
        assert_eq!(Field::FirstName.key(), "firstName");
        assert_eq!(Field::Address.key(), "apartment");
    }
}

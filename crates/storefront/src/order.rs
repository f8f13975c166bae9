//! Order formatting and the WhatsApp deep link.
//!
//! The formatter is the last step of checkout: it renders the validated
//! shipping form, the cart snapshot, and the pricing numbers into one text
//! message. Output is byte-for-byte deterministic for identical inputs;
//! the integration tests pin golden copies of it.

use std::fmt::Write as _;

use morshd_core::{Locale, PaymentMethod};

use crate::cart::CartLine;
use crate::checkout::ShippingForm;
use crate::pricing::PricingBreakdown;

/// The coupon details the summary block prints when one is applied.
#[derive(Debug, Clone, Copy)]
pub struct AppliedCoupon<'a> {
    /// The configured code, echoed back so the seller can verify it.
    pub code: &'a str,
    /// Discount percentage.
    pub rate_percent: u8,
}

/// Render the full order message in the requested locale.
///
/// Layout: header, shipping block, itemized lines, then the summary. The
/// discount block only appears when `coupon` is `Some`; the delivery fee is
/// shown to the customer in the UI, not repeated in the message.
#[must_use]
pub fn format_order(
    lines: &[CartLine],
    form: &ShippingForm,
    pricing: &PricingBreakdown,
    coupon: Option<AppliedCoupon<'_>>,
    locale: Locale,
) -> String {
    let ar = locale.is_rtl();
    let mut message = String::new();

    if ar {
        message.push_str("🛍️ *طلب جديد من متجر Morsh-D*\n\n");
        message.push_str("📦 *معلومات الشحن:*\n");
        let _ = writeln!(message, "👤 الاسم: {} {}", form.first_name, form.last_name);
        if !form.email.is_empty() {
            let _ = writeln!(message, "📧 البريد: {}", form.email);
        }
        let _ = writeln!(message, "📱 الهاتف: {}", form.phone);
        let _ = writeln!(message, "📍 المحافظة: {}", form.governorate);
        let _ = writeln!(message, "🏙️ المدينة: {}", form.city);
        let _ = writeln!(message, "🏠 العنوان: {}", form.address);
        let _ = writeln!(
            message,
            "💳 طريقة الدفع: {}\n",
            payment_label(form, locale)
        );

        message.push_str("🛒 *المنتجات:*\n");
        for (index, line) in lines.iter().enumerate() {
            let _ = writeln!(
                message,
                "{}. *{}*\n   المقاس: {}\n   الكمية: {}\n   السعر: {} جنيه\n   المجموع: {} جنيه\n",
                index + 1,
                line.display_name(locale),
                line.size.label(),
                line.quantity,
                line.unit_price,
                line.line_total(),
            );
        }

        let _ = write!(
            message,
            "━━━━━━━━━━━━━━━\n*المجموع: {} جنيه*\n*عدد القطع: {}*",
            pricing.subtotal, pricing.total_items
        );
        if let Some(coupon) = coupon {
            let _ = write!(
                message,
                "\n🎟️ *كوبون خصم: {} (-{}%)*\n*الخصم: -{} جنيه*\n*المجموع بعد الخصم: {} جنيه*",
                coupon.code, coupon.rate_percent, pricing.discount, pricing.final_price
            );
        }
    } else {
        message.push_str("🛍️ *New Order from Morsh-D Store*\n\n");
        message.push_str("📦 *Shipping Information:*\n");
        let _ = writeln!(message, "👤 Name: {} {}", form.first_name, form.last_name);
        if !form.email.is_empty() {
            let _ = writeln!(message, "📧 Email: {}", form.email);
        }
        let _ = writeln!(message, "📱 Phone: {}", form.phone);
        let _ = writeln!(message, "📍 Governorate: {}", form.governorate);
        let _ = writeln!(message, "🏙️ City: {}", form.city);
        let _ = writeln!(message, "🏠 Address: {}", form.address);
        let _ = writeln!(
            message,
            "💳 Payment Method: {}\n",
            payment_label(form, locale)
        );

        message.push_str("🛒 *Order Items:*\n");
        for (index, line) in lines.iter().enumerate() {
            let _ = writeln!(
                message,
                "{}. *{}*\n   Size: {}\n   Quantity: {}\n   Price: {} EGP\n   Subtotal: {} EGP\n",
                index + 1,
                line.display_name(locale),
                line.size.label(),
                line.quantity,
                line.unit_price,
                line.line_total(),
            );
        }

        let _ = write!(
            message,
            "━━━━━━━━━━━━━━━\n*Subtotal: {} EGP*\n*Total Items: {}*",
            pricing.subtotal, pricing.total_items
        );
        if let Some(coupon) = coupon {
            let _ = write!(
                message,
                "\n🎟️ *Coupon: {} (-{}%)*\n*Discount: -{} EGP*\n*Total after discount: {} EGP*",
                coupon.code, coupon.rate_percent, pricing.discount, pricing.final_price
            );
        }
    }

    message
}

fn payment_label(form: &ShippingForm, locale: Locale) -> &'static str {
    form.payment_method
        .unwrap_or(PaymentMethod::Cash)
        .label(locale.is_rtl())
}

/// Build the `wa.me` deep link carrying the percent-encoded message.
///
/// Opening the link is the caller's job; the engine only produces it.
#[must_use]
pub fn whatsapp_url(phone_number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{phone_number}?text={}",
        urlencoding::encode(message)
    )
}

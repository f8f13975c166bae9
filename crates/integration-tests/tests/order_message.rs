//! Golden assertions on the generated order message.
//!
//! The message is what the seller actually reads on WhatsApp, so its exact
//! layout is pinned here. Any change to the formatter shows up as a full
//! diff against these strings.

#![allow(clippy::unwrap_used)]

use morshd_core::{Locale, Size};
use morshd_storefront::{CheckoutSession, MemoryDraftStore, StoreConfig, catalog};

fn session_with_order() -> CheckoutSession<MemoryDraftStore> {
    let mut session = CheckoutSession::new(StoreConfig::default(), MemoryDraftStore::new());
    session.update_form(|form| {
        form.first_name = "Omar".to_owned();
        form.last_name = "Hassan".to_owned();
        form.email = "omar@example.com".to_owned();
        form.phone = "01012345678".to_owned();
        form.set_governorate("Gharbiya");
        form.city = "Tanta".to_owned();
        form.address = "12 El Galaa St".to_owned();
    });
    session.cart_mut().add(catalog::featured().cart_line(Size::M));
    session
}

#[test]
fn test_golden_english_message_with_coupon() {
    let mut session = session_with_order();
    let cart = session.cart_mut();
    cart.set_coupon_input("MORSH-D");
    cart.apply_coupon(&StoreConfig::default().coupon).unwrap();

    let handoff = session.checkout(Locale::En).unwrap();
    assert_eq!(
        handoff.message,
        "🛍️ *New Order from Morsh-D Store*\n\
         \n\
         📦 *Shipping Information:*\n\
         👤 Name: Omar Hassan\n\
         📧 Email: omar@example.com\n\
         📱 Phone: 01012345678\n\
         📍 Governorate: Gharbiya\n\
         🏙️ City: Tanta\n\
         🏠 Address: 12 El Galaa St\n\
         💳 Payment Method: 💵 Cash on Delivery\n\
         \n\
         🛒 *Order Items:*\n\
         1. *DEMENTE BLACK ZIPUP JACKET*\n   \
         Size: M\n   \
         Quantity: 1\n   \
         Price: 1200 EGP\n   \
         Subtotal: 1200 EGP\n\
         \n\
         ━━━━━━━━━━━━━━━\n\
         *Subtotal: 1200 EGP*\n\
         *Total Items: 1*\n\
         🎟️ *Coupon: MORSH-D (-20%)*\n\
         *Discount: -240 EGP*\n\
         *Total after discount: 960 EGP*"
    );
}

#[test]
fn test_golden_arabic_message_without_coupon() {
    let mut session = session_with_order();
    session.update_form(|form| form.email = String::new());

    let handoff = session.checkout(Locale::Ar).unwrap();
    assert_eq!(
        handoff.message,
        "🛍️ *طلب جديد من متجر Morsh-D*\n\
         \n\
         📦 *معلومات الشحن:*\n\
         👤 الاسم: Omar Hassan\n\
         📱 الهاتف: 01012345678\n\
         📍 المحافظة: Gharbiya\n\
         🏙️ المدينة: Tanta\n\
         🏠 العنوان: 12 El Galaa St\n\
         💳 طريقة الدفع: 💵 الدفع عند الاستلام\n\
         \n\
         🛒 *المنتجات:*\n\
         1. *جاكت ديمنتي الأسود بسوستة*\n   \
         المقاس: M\n   \
         الكمية: 1\n   \
         السعر: 1200 جنيه\n   \
         المجموع: 1200 جنيه\n\
         \n\
         ━━━━━━━━━━━━━━━\n\
         *المجموع: 1200 جنيه*\n\
         *عدد القطع: 1*"
    );
}

#[test]
fn test_whatsapp_link_round_trips_the_message() {
    let mut session = session_with_order();
    let handoff = session.checkout(Locale::En).unwrap();

    let (base, encoded) = handoff.whatsapp_url.split_once("?text=").unwrap();
    assert_eq!(base, "https://wa.me/201013816187");
    assert_eq!(
        urlencoding::decode(encoded).unwrap().into_owned(),
        handoff.message
    );
}

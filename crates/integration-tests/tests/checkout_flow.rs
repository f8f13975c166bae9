//! End-to-end checkout journeys.
//!
//! Each test drives a [`CheckoutSession`] the way the UI would: add items,
//! fill the shipping form, optionally apply the coupon, then check out and
//! inspect the handoff.

#![allow(clippy::unwrap_used)]

use morshd_core::{Locale, Money, Size};
use morshd_storefront::{
    CheckoutError, CheckoutSession, Field, MemoryDraftStore, StoreConfig, catalog,
};

fn session() -> CheckoutSession<MemoryDraftStore> {
    CheckoutSession::new(StoreConfig::default(), MemoryDraftStore::new())
}

fn fill_valid_form(session: &mut CheckoutSession<MemoryDraftStore>) {
    session.update_form(|form| {
        form.first_name = "Omar".to_owned();
        form.last_name = "Hassan".to_owned();
        form.phone = "01012345678".to_owned();
        form.set_governorate("Gharbiya");
        form.city = "Tanta".to_owned();
        form.address = "12 El Galaa St".to_owned();
    });
}

// =============================================================================
// Happy path
// =============================================================================

#[test]
fn test_single_item_checkout_without_coupon() {
    let mut session = session();
    fill_valid_form(&mut session);
    session.cart_mut().add(catalog::featured().cart_line(Size::M));

    let pricing = session
        .cart()
        .pricing(&session.form().city, session.config());
    assert_eq!(pricing.subtotal, Money::new(1200));
    assert_eq!(pricing.discount, Money::ZERO);
    assert_eq!(pricing.delivery_fee, Money::new(45));
    assert_eq!(pricing.grand_total, Money::new(1245));

    let handoff = session.checkout(Locale::En).unwrap();
    assert!(handoff.message.contains("1. *DEMENTE BLACK ZIPUP JACKET*"));
    assert!(handoff.message.contains("*Subtotal: 1200 EGP*"));
    assert!(!handoff.message.contains("Coupon"));
    assert!(
        handoff
            .whatsapp_url
            .starts_with("https://wa.me/201013816187?text=")
    );
    assert!(session.cart().is_empty());
}

#[test]
fn test_checkout_with_coupon_applied() {
    let mut session = session();
    fill_valid_form(&mut session);

    let cart = session.cart_mut();
    cart.add(catalog::featured().cart_line(Size::M));
    cart.set_coupon_input("morsh-d");
    cart.apply_coupon(&StoreConfig::default().coupon).unwrap();

    let handoff = session.checkout(Locale::En).unwrap();
    assert!(handoff.message.contains("🎟️ *Coupon: MORSH-D (-20%)*"));
    assert!(handoff.message.contains("*Discount: -240 EGP*"));
    assert!(
        handoff
            .message
            .ends_with("*Total after discount: 960 EGP*")
    );
}

#[test]
fn test_merged_lines_and_high_delivery_fee() {
    let mut session = session();
    fill_valid_form(&mut session);
    session.update_form(|form| {
        form.set_governorate("Cairo");
        form.city = "Nasr City".to_owned();
    });

    let cart = session.cart_mut();
    cart.add(catalog::featured().cart_line(Size::M));
    cart.add(catalog::featured().cart_line(Size::M));
    cart.add(catalog::featured().cart_line(Size::L));
    assert_eq!(cart.lines().len(), 2);
    assert_eq!(cart.total_items(), 3);

    let pricing = session
        .cart()
        .pricing(&session.form().city, session.config());
    assert_eq!(pricing.subtotal, Money::new(3600));
    assert_eq!(pricing.delivery_fee, Money::new(70));
    assert_eq!(pricing.grand_total, Money::new(3670));

    let handoff = session.checkout(Locale::En).unwrap();
    assert!(handoff.message.contains("Quantity: 2"));
    assert!(handoff.message.contains("*Total Items: 3*"));
}

// =============================================================================
// Guards
// =============================================================================

#[test]
fn test_empty_cart_never_produces_a_message() {
    let mut session = session();
    fill_valid_form(&mut session);
    assert!(matches!(
        session.checkout(Locale::En),
        Err(CheckoutError::EmptyCart)
    ));
}

#[test]
fn test_invalid_form_reports_every_bad_field() {
    let mut session = session();
    session.cart_mut().add(catalog::featured().cart_line(Size::M));

    let Err(CheckoutError::InvalidForm(errors)) = session.checkout(Locale::En) else {
        panic!("expected invalid form");
    };
    for field in [
        Field::FirstName,
        Field::LastName,
        Field::Phone,
        Field::Governorate,
        Field::City,
        Field::Address,
    ] {
        assert!(errors.get(field).is_some(), "missing error for {field:?}");
    }
    // Email is optional and absent from the error set
    assert!(errors.get(Field::Email).is_none());
    assert!(!session.cart().is_empty(), "failed checkout must not clear");
}

#[test]
fn test_governorate_change_clears_city_and_invalidates_form() {
    let mut session = session();
    fill_valid_form(&mut session);
    session.cart_mut().add(catalog::featured().cart_line(Size::M));

    session.update_form(|form| form.set_governorate("Giza"));
    assert_eq!(session.form().city, "");

    let Err(CheckoutError::InvalidForm(errors)) = session.checkout(Locale::En) else {
        panic!("expected invalid form after city reset");
    };
    assert_eq!(errors.len(), 1);
    assert!(errors.get(Field::City).is_some());
}

// =============================================================================
// Coupon lifecycle through the session
// =============================================================================

#[test]
fn test_rejected_coupon_leaves_pricing_untouched() {
    let mut session = session();
    fill_valid_form(&mut session);

    let cart = session.cart_mut();
    cart.add(catalog::featured().cart_line(Size::M));
    cart.set_coupon_input("WRONG-CODE");
    assert!(cart.apply_coupon(&StoreConfig::default().coupon).is_err());
    assert!(!cart.coupon_applied());

    let pricing = session
        .cart()
        .pricing(&session.form().city, session.config());
    assert_eq!(pricing.discount, Money::ZERO);
    assert_eq!(pricing.final_price, Money::new(1200));
}

#[test]
fn test_discount_tracks_cart_changes() {
    let mut session = session();
    let config = StoreConfig::default();

    let cart = session.cart_mut();
    cart.add(catalog::featured().cart_line(Size::M));
    cart.set_coupon_input("MORSH-D");
    cart.apply_coupon(&config.coupon).unwrap();
    assert_eq!(cart.discount(&config.coupon), Money::new(240));

    cart.add(catalog::featured().cart_line(Size::L));
    assert_eq!(cart.discount(&config.coupon), Money::new(480));

    cart.remove_coupon();
    assert_eq!(cart.discount(&config.coupon), Money::ZERO);
}

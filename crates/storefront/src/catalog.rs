//! The store's catalog: exactly one product.
//!
//! Morsh-D sells a single jacket in five sizes. The catalog exists so the
//! product literal lives in one place instead of being rebuilt by every
//! caller that wants to add it to a cart.

use morshd_core::{Money, ProductId, Size};

use crate::cart::CartLine;

/// The product presented on the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Stable handle used as the cart identity key.
    pub id: ProductId,
    /// English display name.
    pub name: String,
    /// Arabic display name.
    pub name_ar: String,
    /// Price per unit in whole EGP.
    pub price: Money,
    /// Sizes this product is offered in.
    pub sizes: &'static [Size],
    /// Gallery asset references; the first one is the default cart image.
    pub images: &'static [&'static str],
}

impl Product {
    /// Build the cart line for a chosen size.
    ///
    /// The returned line carries quantity 1; the cart store increments on
    /// repeat additions.
    #[must_use]
    pub fn cart_line(&self, size: Size) -> CartLine {
        CartLine {
            product_id: self.id.clone(),
            name: self.name.clone(),
            name_ar: self.name_ar.clone(),
            size,
            unit_price: self.price,
            quantity: 1,
            image: self.images.first().copied().unwrap_or_default().to_owned(),
        }
    }
}

/// The featured (and only) product.
#[must_use]
pub fn featured() -> Product {
    Product {
        id: ProductId::new("arcade-tshirt"),
        name: "DEMENTE BLACK ZIPUP JACKET".to_owned(),
        name_ar: "جاكت ديمنتي الأسود بسوستة".to_owned(),
        price: Money::new(1200),
        sizes: &Size::ALL,
        images: &[
            "/images/IMG_9020.webp",
            "/images/IMG_9028.webp",
            "/images/IMG_9008.webp",
            "/images/IMG_9009.webp",
            "/images/IMG_9010.webp",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_product() {
        let product = featured();
        assert_eq!(product.id, ProductId::new("arcade-tshirt"));
        assert_eq!(product.price, Money::new(1200));
        assert_eq!(product.sizes.len(), 5);
    }

    #[test]
    fn test_cart_line_has_quantity_one() {
        let line = featured().cart_line(Size::M);
        assert_eq!(line.quantity, 1);
        assert_eq!(line.size, Size::M);
        assert_eq!(line.unit_price, Money::new(1200));
        assert_eq!(line.image, "/images/IMG_9020.webp");
    }
}

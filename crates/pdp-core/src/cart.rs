//! Hand-off to the cart collaborator.
//!
//! Adding to the cart is owned elsewhere; this module only fixes what the
//! product view passes along.

use serde::Serialize;

use crate::catalog::{Product, ProductType};
use crate::ids::DatabaseId;

/// Arguments of an add-to-cart action.
///
/// `variation_id` is `None` for simple products and otherwise the currently
/// selected variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest<'a> {
    pub product: &'a Product,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation_id: Option<DatabaseId>,
    pub full_width: bool,
}

impl AddToCartRequest<'_> {
    /// Whether the cart should treat this as a simple-product addition.
    pub fn is_simple(&self) -> bool {
        self.variation_id.is_none()
    }

    pub fn product_type(&self) -> ProductType {
        self.product.product_type()
    }
}

/// Cart collaborator seam.
pub trait AddToCart {
    type Error;

    /// Add the product (and variation, if any) to the cart.
    fn add_to_cart(&self, request: &AddToCartRequest<'_>) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Variation;
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingCart {
        added: RefCell<Vec<Option<DatabaseId>>>,
    }

    impl AddToCart for RecordingCart {
        type Error = std::convert::Infallible;

        fn add_to_cart(&self, request: &AddToCartRequest<'_>) -> Result<(), Self::Error> {
            self.added.borrow_mut().push(request.variation_id);
            Ok(())
        }
    }

    #[test]
    fn test_simple_request_omits_variation() {
        let product = Product::new("Wand").with_price("100 kr");
        let request = AddToCartRequest {
            product: &product,
            variation_id: None,
            full_width: true,
        };
        assert!(request.is_simple());

        let value = serde_json::to_value(request).unwrap();
        assert_eq!(value["fullWidth"], json!(true));
        assert!(value.get("variationId").is_none());
        assert_eq!(value["product"]["name"], json!("Wand"));
    }

    #[test]
    fn test_variable_request_serializes_variation() {
        let product = Product::new("Picks").with_variations([Variation::new(44, "Picks - Thin")]);
        let request = AddToCartRequest {
            product: &product,
            variation_id: Some(DatabaseId(44)),
            full_width: false,
        };
        assert_eq!(request.product_type(), ProductType::Variable);

        let value = serde_json::to_value(request).unwrap();
        assert_eq!(value["variationId"], json!(44));
    }

    #[test]
    fn test_collaborator_receives_request() {
        let cart = RecordingCart::default();
        let product = Product::new("Picks").with_variations([Variation::new(3, "Picks - Thick")]);
        let request = AddToCartRequest {
            product: &product,
            variation_id: Some(DatabaseId(3)),
            full_width: true,
        };
        cart.add_to_cart(&request).unwrap();
        assert_eq!(*cart.added.borrow(), vec![Some(DatabaseId(3))]);
    }
}

//! Product record as delivered by the storefront's GraphQL source.

use serde::{Deserialize, Serialize};

use crate::catalog::variation::{lenient_variations, Variation, Variations};
use crate::ids::DatabaseId;

/// Product type classification, derived from the presence of variations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductType {
    /// Product with standalone price fields.
    #[default]
    Simple,
    /// Product with variations and a combined price string.
    Variable,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Simple => "simple",
            ProductType::Variable => "variable",
        }
    }
}

/// Product image.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    #[serde(default)]
    pub source_url: Option<String>,
}

/// A product as shown on the detail view. Read-only to this crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Numeric product id, when the source includes it.
    #[serde(default)]
    pub database_id: Option<DatabaseId>,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Rich-text (HTML) description.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<ProductImage>,
    #[serde(default)]
    pub on_sale: bool,
    /// Current price. For variable products this is the combined string.
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub regular_price: Option<String>,
    #[serde(default)]
    pub sale_price: Option<String>,
    #[serde(default)]
    pub stock_quantity: Option<i64>,
    /// Variations; absent for simple products. Malformed lists read as absent.
    #[serde(
        default,
        deserialize_with = "lenient_variations",
        skip_serializing_if = "Option::is_none"
    )]
    pub variations: Option<Variations>,
}

impl Product {
    /// Create a simple product with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parse a product from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, crate::PdpError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Variable when a variation list is present, even if it is empty.
    pub fn product_type(&self) -> ProductType {
        if self.variations.is_some() {
            ProductType::Variable
        } else {
            ProductType::Simple
        }
    }

    /// Variations in sequence order; empty for simple products.
    pub fn variation_nodes(&self) -> &[Variation] {
        self.variations
            .as_ref()
            .map(|v| v.nodes.as_slice())
            .unwrap_or(&[])
    }

    /// Image URL, or the given placeholder when the product has none.
    pub fn image_url<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.image
            .as_ref()
            .and_then(|img| img.source_url.as_deref())
            .filter(|url| !url.is_empty())
            .unwrap_or(placeholder)
    }

    /// Stock count worth showing: only strictly positive quantities.
    pub fn available_stock(&self) -> Option<i64> {
        self.stock_quantity.filter(|q| *q > 0)
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_sale(mut self, sale_price: impl Into<String>, regular_price: impl Into<String>) -> Self {
        self.on_sale = true;
        self.sale_price = Some(sale_price.into());
        self.regular_price = Some(regular_price.into());
        self
    }

    pub fn with_variations(mut self, variations: impl IntoIterator<Item = Variation>) -> Self {
        self.variations = Some(variations.into_iter().collect());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_product_from_json() {
        let product: Product = serde_json::from_value(json!({
            "name": "Harry Potter Wand",
            "description": "<p>Elder wood</p>",
            "image": { "sourceUrl": "https://cdn.example/wand.jpg" },
            "onSale": true,
            "price": "80 kr",
            "regularPrice": "100 kr",
            "salePrice": "80 kr",
            "stockQuantity": 4
        }))
        .unwrap();

        assert_eq!(product.product_type(), ProductType::Simple);
        assert!(product.variation_nodes().is_empty());
        assert_eq!(product.image_url("fallback"), "https://cdn.example/wand.jpg");
        assert_eq!(product.available_stock(), Some(4));
    }

    #[test]
    fn test_variable_product_from_json() {
        let product: Product = serde_json::from_value(json!({
            "name": "Guitar Picks",
            "onSale": false,
            "price": "10 kr - 20 kr",
            "variations": { "nodes": [
                { "id": "n1", "databaseId": 31, "name": "Picks - Thin", "stockQuantity": 10 }
            ]}
        }))
        .unwrap();

        assert_eq!(product.product_type(), ProductType::Variable);
        assert_eq!(product.variation_nodes()[0].database_id, DatabaseId(31));
    }

    #[test]
    fn test_malformed_variations_read_as_absent() {
        let product: Product = serde_json::from_value(json!({
            "name": "Odd",
            "variations": { "nodes": "not a list" }
        }))
        .unwrap();
        assert_eq!(product.product_type(), ProductType::Simple);

        let product: Product = serde_json::from_value(json!({
            "name": "Odd",
            "variations": 17
        }))
        .unwrap();
        assert!(product.variations.is_none());

        let product: Product =
            serde_json::from_value(json!({ "name": "Odd", "variations": null })).unwrap();
        assert!(product.variations.is_none());
    }

    #[test]
    fn test_partly_broken_variation_list_is_still_variable() {
        let product: Product = serde_json::from_value(json!({
            "name": "Guitar Picks",
            "variations": { "nodes": [
                { "databaseId": 1, "name": "Picks - Thin" },
                { "databaseId": 2, "name": null },
                { "databaseId": null, "name": "Picks - Ghost" }
            ]}
        }))
        .unwrap();

        assert_eq!(product.product_type(), ProductType::Variable);
        let ids: Vec<_> = product.variation_nodes().iter().map(|v| v.database_id).collect();
        assert_eq!(ids, vec![DatabaseId(1), DatabaseId(2)]);
    }

    #[test]
    fn test_empty_variation_list_is_still_variable() {
        let product: Product =
            serde_json::from_value(json!({ "name": "Empty", "variations": { "nodes": [] } }))
                .unwrap();
        assert_eq!(product.product_type(), ProductType::Variable);
        assert!(product.variation_nodes().is_empty());
    }

    #[test]
    fn test_image_fallback() {
        let product = Product::new("No image");
        assert_eq!(product.image_url("https://via.placeholder.com/600"), "https://via.placeholder.com/600");

        let mut product = Product::new("Blank image");
        product.image = Some(ProductImage { source_url: Some(String::new()) });
        assert_eq!(product.image_url("placeholder"), "placeholder");
    }

    #[test]
    fn test_available_stock_hides_zero_and_unknown() {
        let mut product = Product::new("Stock");
        assert_eq!(product.available_stock(), None);
        product.stock_quantity = Some(0);
        assert_eq!(product.available_stock(), None);
        product.stock_quantity = Some(2);
        assert_eq!(product.available_stock(), Some(2));
    }
}

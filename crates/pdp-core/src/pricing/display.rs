//! Display price resolution.

use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ProductType};
use crate::ids::DatabaseId;
use crate::pricing::normalize::normalize;
use crate::pricing::variant_price::{AggregatePriceFormat, DelimitedAggregate, PriceSide};

/// Price pair to render: the current price and, on sale, the struck-through one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceDisplay {
    pub current: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
}

impl PriceDisplay {
    /// Whether a struck-through original price accompanies the current one.
    pub fn is_sale(&self) -> bool {
        self.original.is_some()
    }
}

/// Resolves the displayed price of a product.
///
/// Sale state and product type are independent axes:
///
/// | on sale | type     | current                 | original                 |
/// |---------|----------|-------------------------|--------------------------|
/// | no      | any      | `price`                 | none                     |
/// | yes     | simple   | `salePrice`             | `regularPrice`           |
/// | yes     | variable | left side of `price`    | right side of `price`    |
#[derive(Debug, Clone, Default)]
pub struct PriceDisplayResolver<F = DelimitedAggregate> {
    format: F,
}

impl<F: AggregatePriceFormat> PriceDisplayResolver<F> {
    pub fn new(format: F) -> Self {
        Self { format }
    }

    pub fn format(&self) -> &F {
        &self.format
    }

    /// Compute the price pair for `product`.
    ///
    /// All variations of a variable product share the product's combined
    /// price, so `_selection` does not change the result.
    pub fn resolve(&self, product: &Product, _selection: Option<DatabaseId>) -> PriceDisplay {
        if !product.on_sale {
            return PriceDisplay {
                current: normalize(product.price.as_deref()),
                original: None,
            };
        }

        match product.product_type() {
            ProductType::Simple => PriceDisplay {
                current: normalize(product.sale_price.as_deref()),
                original: Some(normalize(product.regular_price.as_deref())),
            },
            ProductType::Variable => {
                let aggregate = product.price.as_deref().unwrap_or_default();
                let current = self.format.extract_side(aggregate, PriceSide::Left);
                let original = self.format.extract_side(aggregate, PriceSide::Right);
                PriceDisplay {
                    current: normalize(Some(&current)),
                    original: Some(normalize(Some(&original))),
                }
            }
        }
    }
}

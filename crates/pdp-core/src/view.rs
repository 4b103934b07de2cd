//! Render model for the product detail view.
//!
//! [`ProductViewer`] ties the pieces together for one view instance: it owns
//! the delivered product, the lifecycle and the resolvers, and produces a
//! [`ProductView`] snapshot that renderers turn into markup.

use serde::Serialize;

use crate::cart::AddToCartRequest;
use crate::catalog::{Product, ProductType};
use crate::config::{DisplayConfig, PdpConfig};
use crate::description::{plain_description, DescriptionSanitizer, HtmlSanitizer};
use crate::ids::{DatabaseId, ViewId};
use crate::pricing::{AggregatePriceFormat, PriceDisplay, PriceDisplayResolver};
use crate::selection::{LifecycleObserver, ProductViewLifecycle, VariantOption, VariantRegistry, ViewPhase};
use crate::PdpError;

/// Everything a renderer needs, already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductView {
    pub phase: ViewPhase,
    pub name: String,
    pub image_url: String,
    pub price: PriceDisplay,
    pub description: String,
    /// Product stock, only when strictly positive.
    pub stock: Option<i64>,
    pub product_type: ProductType,
    /// Selector entries; empty for simple products.
    pub options: Vec<VariantOption>,
    pub selected_variation_id: Option<DatabaseId>,
    pub full_width_cart: bool,
}

impl ProductView {
    /// Snapshot of a view that has not received its product yet.
    pub fn loading(display: &DisplayConfig) -> Self {
        Self {
            phase: ViewPhase::Loading,
            name: String::new(),
            image_url: display.placeholder_image.clone(),
            price: PriceDisplay::default(),
            description: String::new(),
            stock: None,
            product_type: ProductType::Simple,
            options: Vec::new(),
            selected_variation_id: None,
            full_width_cart: display.full_width_cart,
        }
    }

    /// Build a snapshot of `product` under the lifecycle's current selection.
    pub fn build<F: AggregatePriceFormat>(
        product: &Product,
        lifecycle: &ProductViewLifecycle,
        resolver: &PriceDisplayResolver<F>,
        sanitizer: &dyn DescriptionSanitizer,
        display: &DisplayConfig,
    ) -> Self {
        if lifecycle.is_loading() {
            return Self::loading(display);
        }

        let selected = lifecycle.selected_variation_id();
        let options = match product.variations {
            Some(_) => VariantRegistry::new(product.variation_nodes())
                .options(&display.option_separator, selected),
            None => Vec::new(),
        };

        Self {
            phase: lifecycle.phase(),
            name: product.name.clone(),
            image_url: product.image_url(&display.placeholder_image).to_string(),
            price: resolver.resolve(product, selected),
            description: plain_description(sanitizer, product.description.as_deref()),
            stock: product.available_stock(),
            product_type: product.product_type(),
            options,
            selected_variation_id: selected,
            full_width_cart: display.full_width_cart,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.phase == ViewPhase::Ready
    }

    pub fn has_variations(&self) -> bool {
        self.product_type == ProductType::Variable
    }
}

type BoxedFormat = Box<dyn AggregatePriceFormat + Send + Sync>;

/// One product view instance.
pub struct ProductViewer {
    config: PdpConfig,
    lifecycle: ProductViewLifecycle,
    resolver: PriceDisplayResolver<BoxedFormat>,
    sanitizer: Box<dyn DescriptionSanitizer + Send + Sync>,
    product: Option<Product>,
}

impl ProductViewer {
    /// Create a viewer using the configured price format and an HTML sanitizer.
    pub fn new(config: PdpConfig) -> Self {
        let format: BoxedFormat = Box::new(config.pricing.aggregate_format());
        Self {
            config,
            lifecycle: ProductViewLifecycle::new(),
            resolver: PriceDisplayResolver::new(format),
            sanitizer: Box::new(HtmlSanitizer),
            product: None,
        }
    }

    /// Replace the description sanitizer.
    pub fn with_sanitizer(mut self, sanitizer: impl DescriptionSanitizer + Send + Sync + 'static) -> Self {
        self.sanitizer = Box::new(sanitizer);
        self
    }

    /// Replace the combined price format.
    pub fn with_price_format(mut self, format: impl AggregatePriceFormat + Send + Sync + 'static) -> Self {
        let format: BoxedFormat = Box::new(format);
        self.resolver = PriceDisplayResolver::new(format);
        self
    }

    /// Register a lifecycle observer.
    pub fn with_observer(mut self, observer: impl LifecycleObserver + 'static) -> Self {
        self.lifecycle = self.lifecycle.with_observer(observer);
        self
    }

    /// Use a known view id instead of a generated one. Resets observers, so
    /// call it before [`with_observer`](Self::with_observer).
    pub fn with_view_id(mut self, view_id: ViewId) -> Self {
        self.lifecycle = ProductViewLifecycle::with_view_id(view_id);
        self
    }

    pub fn view_id(&self) -> &ViewId {
        self.lifecycle.view_id()
    }

    pub fn config(&self) -> &PdpConfig {
        &self.config
    }

    pub fn lifecycle(&self) -> &ProductViewLifecycle {
        &self.lifecycle
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    /// Deliver (or re-deliver) the product. Returns `true` when the
    /// selection was reinitialized.
    pub fn deliver(&mut self, product: Product) -> bool {
        let reselected = self.lifecycle.on_product(&product);
        self.product = Some(product);
        reselected
    }

    /// Apply a user selection from a raw selector value.
    pub fn select_from_value(&mut self, value: &str) -> Result<DatabaseId, PdpError> {
        self.lifecycle.select_from_value(value)
    }

    /// Apply a user selection.
    pub fn select(&mut self, id: DatabaseId) -> Result<DatabaseId, PdpError> {
        self.lifecycle.select_variation(id)
    }

    /// Current render snapshot.
    pub fn view(&self) -> ProductView {
        match &self.product {
            Some(product) => ProductView::build(
                product,
                &self.lifecycle,
                &self.resolver,
                self.sanitizer.as_ref(),
                &self.config.display,
            ),
            None => ProductView::loading(&self.config.display),
        }
    }

    /// Cart hand-off for the delivered product; `None` while loading.
    pub fn cart_request(&self) -> Option<AddToCartRequest<'_>> {
        self.product
            .as_ref()
            .map(|product| self.lifecycle.cart_request(product, self.config.display.full_width_cart))
    }
}

impl Default for ProductViewer {
    fn default() -> Self {
        Self::new(PdpConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Variation;
    use crate::description::UnsupportedSanitizer;
    use crate::pricing::DelimitedAggregate;

    fn picks() -> Product {
        let mut product = Product::new("Guitar Picks")
            .with_price("kr 80 - kr 100")
            .with_variations([
                Variation::new(1, "Picks - Thin").with_stock(5),
                Variation::new(2, "Picks - Heavy").with_stock(0),
            ]);
        product.on_sale = true;
        product.description = Some("<p>Set of <em>twelve</em></p>".to_string());
        product.stock_quantity = Some(12);
        product
    }

    #[test]
    fn test_loading_view_before_delivery() {
        let viewer = ProductViewer::default();
        let view = viewer.view();
        assert!(!view.is_ready());
        assert!(view.options.is_empty());
        assert!(viewer.cart_request().is_none());
    }

    #[test]
    fn test_ready_view_of_variable_product() {
        let mut viewer = ProductViewer::default();
        viewer.deliver(picks());
        let view = viewer.view();

        assert!(view.is_ready());
        assert_eq!(view.name, "Guitar Picks");
        assert_eq!(view.image_url, "https://via.placeholder.com/600");
        assert_eq!(view.price.current, "kr 80");
        assert_eq!(view.price.original.as_deref(), Some("kr 100"));
        assert_eq!(view.description, "Set of twelve");
        assert_eq!(view.stock, Some(12));
        assert_eq!(view.options.len(), 2);
        assert_eq!(view.options[0].label, "Thin");
        assert!(view.options[0].selected);
        assert_eq!(view.selected_variation_id, Some(DatabaseId(1)));
    }

    #[test]
    fn test_selection_flows_to_cart() {
        let mut viewer = ProductViewer::default();
        viewer.deliver(picks());
        viewer.select_from_value("2").unwrap();

        let view = viewer.view();
        assert!(view.options[1].selected);

        let request = viewer.cart_request().unwrap();
        assert_eq!(request.variation_id, Some(DatabaseId(2)));
        assert!(request.full_width);
    }

    #[test]
    fn test_unsupported_sanitizer_blanks_description() {
        let mut viewer = ProductViewer::default().with_sanitizer(UnsupportedSanitizer);
        viewer.deliver(picks());
        assert_eq!(viewer.view().description, "");
    }

    #[test]
    fn test_custom_price_format() {
        let mut product = picks();
        product.price = Some("80 kr###100 kr".to_string());

        let mut viewer = ProductViewer::default().with_price_format(DelimitedAggregate::new("###"));
        viewer.deliver(product);
        let view = viewer.view();
        assert_eq!(view.price.current, "80 kr");
        assert_eq!(view.price.original.as_deref(), Some("100 kr"));
    }

    #[test]
    fn test_simple_product_has_no_options() {
        let mut viewer = ProductViewer::default();
        viewer.deliver(Product::new("Wand").with_price("100 kr"));
        let view = viewer.view();
        assert!(!view.has_variations());
        assert!(view.options.is_empty());
        assert_eq!(view.price.current, "100 kr");
        assert!(viewer.cart_request().unwrap().is_simple());
    }
}

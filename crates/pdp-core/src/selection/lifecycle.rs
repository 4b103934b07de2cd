//! Product view lifecycle state machine.
//!
//! A view starts in [`ViewPhase::Loading`] and moves to [`ViewPhase::Ready`]
//! the first time a product is delivered. Delivering a product whose
//! variation list differs from the last one seen re-runs the default
//! selection; delivering an equal list keeps whatever the user picked.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cart::AddToCartRequest;
use crate::catalog::{Product, Variation, Variations};
use crate::ids::{DatabaseId, ViewId};
use crate::selection::registry::VariantRegistry;
use crate::PdpError;

/// Phases of a product view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ViewPhase {
    /// Waiting for the product.
    #[default]
    Loading,
    /// Product available; price and selector can be rendered.
    Ready,
}

impl ViewPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewPhase::Loading => "loading",
            ViewPhase::Ready => "ready",
        }
    }
}

/// Snapshot of the view-owned selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    pub is_loading: bool,
    pub selected_variation_id: Option<DatabaseId>,
}

/// Events reported to [`LifecycleObserver`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// First product delivered; the view is ready.
    Initialized { default: Option<DatabaseId> },
    /// A product with a different variation list replaced the previous one.
    Reselected {
        previous: Option<DatabaseId>,
        default: Option<DatabaseId>,
    },
    /// The user picked another variation.
    SelectionChanged {
        from: Option<DatabaseId>,
        to: DatabaseId,
    },
    /// A user selection was refused; the previous selection stands.
    SelectionRejected { value: String, reason: String },
}

impl LifecycleEvent {
    pub fn name(&self) -> &'static str {
        match self {
            LifecycleEvent::Initialized { .. } => "initialized",
            LifecycleEvent::Reselected { .. } => "reselected",
            LifecycleEvent::SelectionChanged { .. } => "selection_changed",
            LifecycleEvent::SelectionRejected { .. } => "selection_rejected",
        }
    }
}

/// Observer trait for lifecycle events.
pub trait LifecycleObserver: Send + Sync {
    /// Called after the state change has been applied.
    fn on_event(&self, view_id: &ViewId, event: &LifecycleEvent);
}

/// Selection state machine for one product view instance.
pub struct ProductViewLifecycle {
    view_id: ViewId,
    phase: ViewPhase,
    selected: Option<DatabaseId>,
    /// Variation list of the last delivered product. Outer `None` until the
    /// first delivery.
    seen: Option<Option<Variations>>,
    observers: Vec<Box<dyn LifecycleObserver>>,
}

impl ProductViewLifecycle {
    pub fn new() -> Self {
        Self::with_view_id(ViewId::generate())
    }

    pub fn with_view_id(view_id: ViewId) -> Self {
        Self {
            view_id,
            phase: ViewPhase::Loading,
            selected: None,
            seen: None,
            observers: Vec::new(),
        }
    }

    /// Register an observer.
    pub fn with_observer(mut self, observer: impl LifecycleObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn view_id(&self) -> &ViewId {
        &self.view_id
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ViewPhase::Loading
    }

    pub fn selected_variation_id(&self) -> Option<DatabaseId> {
        self.selected
    }

    pub fn state(&self) -> SelectionState {
        SelectionState {
            is_loading: self.is_loading(),
            selected_variation_id: self.selected,
        }
    }

    /// Variations of the last delivered product.
    pub fn variations(&self) -> &[Variation] {
        match &self.seen {
            Some(Some(v)) => v.nodes.as_slice(),
            _ => &[],
        }
    }

    /// Deliver a product to the view.
    ///
    /// Returns `true` when this delivery (re)initialized the selection.
    pub fn on_product(&mut self, product: &Product) -> bool {
        let first = match &self.seen {
            None => true,
            Some(previous) if *previous != product.variations => false,
            Some(_) => return false,
        };

        self.seen = Some(product.variations.clone());
        self.phase = ViewPhase::Ready;

        let previous = self.selected;
        let default = VariantRegistry::new(product.variation_nodes()).default_variant();
        self.selected = default;

        let event = if first {
            LifecycleEvent::Initialized { default }
        } else {
            LifecycleEvent::Reselected { previous, default }
        };
        self.notify(&event);
        true
    }

    /// Apply a user selection.
    ///
    /// The selection must be one of the current product's variations; on
    /// failure the previous selection is kept.
    pub fn select_variation(&mut self, candidate: DatabaseId) -> Result<DatabaseId, PdpError> {
        if self.is_loading() {
            self.reject(candidate.to_string(), "view is loading");
            return Err(PdpError::NotReady);
        }
        if !VariantRegistry::new(self.variations()).is_valid(candidate) {
            self.reject(candidate.to_string(), "not a variation of this product");
            return Err(PdpError::InvalidVariation(candidate));
        }

        let from = self.selected;
        self.selected = Some(candidate);
        if from != Some(candidate) {
            self.notify(&LifecycleEvent::SelectionChanged { from, to: candidate });
        }
        Ok(candidate)
    }

    /// Apply a selection delivered as a raw selector value.
    pub fn select_from_value(&mut self, value: &str) -> Result<DatabaseId, PdpError> {
        match value.parse::<DatabaseId>() {
            Ok(id) => self.select_variation(id),
            Err(_) => {
                self.reject(value.to_string(), "not an integer");
                Err(PdpError::InvalidSelectionValue(value.to_string()))
            }
        }
    }

    /// Hand-off for the cart collaborator, carrying the current selection.
    pub fn cart_request<'p>(&self, product: &'p Product, full_width: bool) -> AddToCartRequest<'p> {
        AddToCartRequest {
            product,
            variation_id: self.selected,
            full_width,
        }
    }

    fn reject(&self, value: String, reason: &str) {
        self.notify(&LifecycleEvent::SelectionRejected {
            value,
            reason: reason.to_string(),
        });
    }

    fn notify(&self, event: &LifecycleEvent) {
        for observer in &self.observers {
            observer.on_event(&self.view_id, event);
        }
    }
}

impl Default for ProductViewLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProductViewLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductViewLifecycle")
            .field("view_id", &self.view_id)
            .field("phase", &self.phase)
            .field("selected", &self.selected)
            .field("observers", &self.observers.len())
            .finish()
    }
}

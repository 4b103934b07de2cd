//! Lookup and validation over a product's variation list.

use serde::Serialize;

use crate::catalog::Variation;
use crate::ids::{DatabaseId, VariationNodeId};

/// Separator between the product part and the option part of a variation name.
pub const OPTION_SEPARATOR: &str = "- ";

/// Read-only view over an ordered variation list.
#[derive(Debug, Clone, Copy)]
pub struct VariantRegistry<'a> {
    variations: &'a [Variation],
}

impl<'a> VariantRegistry<'a> {
    pub fn new(variations: &'a [Variation]) -> Self {
        Self { variations }
    }

    /// Database id of the first variation, or `None` for an empty list.
    pub fn default_variant(&self) -> Option<DatabaseId> {
        self.variations.first().map(|v| v.database_id)
    }

    /// Whether `candidate` names one of the variations.
    pub fn is_valid(&self, candidate: DatabaseId) -> bool {
        self.variations.iter().any(|v| v.database_id == candidate)
    }

    pub fn get(&self, id: DatabaseId) -> Option<&'a Variation> {
        self.variations.iter().find(|v| v.database_id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.variations.is_empty()
    }

    /// Selector entries in sequence order, labelled with `separator`.
    pub fn options(&self, separator: &str, selected: Option<DatabaseId>) -> Vec<VariantOption> {
        self.variations
            .iter()
            .map(|v| VariantOption {
                key: v.id.clone(),
                value: v.database_id,
                label: option_label_with(&v.name, separator).to_string(),
                stock: v.stock_or_zero(),
                selected: selected == Some(v.database_id),
            })
            .collect()
    }
}

/// Human-readable option part of a variation name.
///
/// Returns what follows the last `"- "`, or the whole name when there is none.
pub fn option_label(variation: &Variation) -> &str {
    option_label_with(&variation.name, OPTION_SEPARATOR)
}

/// [`option_label`] with a custom separator. An empty separator keeps the name.
pub fn option_label_with<'a>(name: &'a str, separator: &str) -> &'a str {
    if separator.is_empty() {
        return name;
    }
    match name.rfind(separator) {
        Some(idx) => &name[idx + separator.len()..],
        None => name,
    }
}

/// One entry of the variant selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantOption {
    /// List key.
    pub key: VariationNodeId,
    /// Value submitted on selection.
    pub value: DatabaseId,
    pub label: String,
    /// Remaining stock; unknown stock reads as zero.
    pub stock: i64,
    pub selected: bool,
}

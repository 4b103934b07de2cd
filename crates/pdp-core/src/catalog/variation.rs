//! Purchasable variations of a variable product.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::ids::{DatabaseId, VariationNodeId};

/// A purchasable variant of a product (e.g. one colour or pack size).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Variation {
    /// Opaque node id, stable across fetches. Used as a list key only.
    #[serde(default)]
    pub id: VariationNodeId,
    /// Identifier forwarded to the cart.
    pub database_id: DatabaseId,
    /// Display name, usually "Product - Option".
    #[serde(default)]
    pub name: String,
    /// Remaining stock, if the store tracks it.
    #[serde(default)]
    pub stock_quantity: Option<i64>,
}

impl Variation {
    /// Create a variation with a name and no stock information.
    pub fn new(database_id: i64, name: impl Into<String>) -> Self {
        let database_id = DatabaseId(database_id);
        Self {
            id: VariationNodeId::new(format!("variation:{}", database_id)),
            database_id,
            name: name.into(),
            stock_quantity: None,
        }
    }

    /// Set the remaining stock.
    pub fn with_stock(mut self, quantity: i64) -> Self {
        self.stock_quantity = Some(quantity);
        self
    }

    /// Read one node leniently. Missing or null text fields read as empty;
    /// a node without an integer `databaseId` cannot be selected and yields `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let database_id = value.get("databaseId")?.as_i64()?;
        let text = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Some(Self {
            id: VariationNodeId::new(text("id")),
            database_id: DatabaseId(database_id),
            name: text("name"),
            stock_quantity: value.get("stockQuantity").and_then(Value::as_i64),
        })
    }

    /// Stock count shown next to the option; unknown stock reads as zero.
    pub fn stock_or_zero(&self) -> i64 {
        self.stock_quantity.unwrap_or(0)
    }
}

/// Ordered list of variations, as delivered in a `{ "nodes": [...] }` connection.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Variations {
    pub nodes: Vec<Variation>,
}

impl Variations {
    pub fn new(nodes: Vec<Variation>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Variation> {
        self.nodes.iter()
    }

    /// Read a `{ nodes }` connection or a bare list, node by node.
    ///
    /// Returns `None` only when no list is present at all; unusable nodes are
    /// dropped without discarding the rest.
    pub fn from_value(value: &Value) -> Option<Self> {
        let nodes = match value {
            Value::Array(nodes) => nodes,
            Value::Object(map) => map.get("nodes")?.as_array()?,
            _ => return None,
        };
        Some(nodes.iter().filter_map(Variation::from_value).collect())
    }
}

impl FromIterator<Variation> for Variations {
    fn from_iter<I: IntoIterator<Item = Variation>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for Variations {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Variations::from_value(&value)
            .ok_or_else(|| de::Error::custom("expected a variation list or a { nodes } connection"))
    }
}

/// Deserialize an optional variation list, treating any non-list shape as absent.
pub(crate) fn lenient_variations<'de, D>(deserializer: D) -> Result<Option<Variations>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Variations::from_value))
}

//! Extraction of one side of a variable product's combined price string.
//!
//! Variable products deliver a single price field that encodes the current
//! and the original value side by side (e.g. `"80 kr - 100 kr"`). How the two
//! halves are separated is a convention of the data source, so it lives behind
//! [`AggregatePriceFormat`] rather than in the display resolver.

use serde::{Deserialize, Serialize};

/// Which half of a combined price string to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriceSide {
    /// The current (sale) value.
    #[default]
    Left,
    /// The original (regular) value.
    Right,
}

impl PriceSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceSide::Left => "left",
            PriceSide::Right => "right",
        }
    }

    /// Read a legacy side selector. Only `"right"` selects the right side;
    /// anything else, including the empty string, selects the left side.
    pub fn from_selector(s: &str) -> Self {
        if s.eq_ignore_ascii_case("right") {
            PriceSide::Right
        } else {
            PriceSide::Left
        }
    }
}

/// Contract for splitting a combined price string.
///
/// Implementations must be pure and must not panic on malformed input: a side
/// that cannot be found comes back as an empty string.
pub trait AggregatePriceFormat {
    fn extract_side(&self, aggregate: &str, side: PriceSide) -> String;
}

/// Combined price whose halves are separated by a fixed delimiter.
///
/// The left side is everything before the first delimiter, the right side
/// everything after it. Without a delimiter neither side is resolvable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimitedAggregate {
    delimiter: String,
}

impl DelimitedAggregate {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }
}

impl Default for DelimitedAggregate {
    fn default() -> Self {
        Self::new("-")
    }
}

impl AggregatePriceFormat for DelimitedAggregate {
    fn extract_side(&self, aggregate: &str, side: PriceSide) -> String {
        if self.delimiter.is_empty() {
            return String::new();
        }
        match aggregate.split_once(self.delimiter.as_str()) {
            Some((left, right)) => match side {
                PriceSide::Left => left.to_string(),
                PriceSide::Right => right.to_string(),
            },
            None => String::new(),
        }
    }
}

impl<F: AggregatePriceFormat + ?Sized> AggregatePriceFormat for &F {
    fn extract_side(&self, aggregate: &str, side: PriceSide) -> String {
        (**self).extract_side(aggregate, side)
    }
}

impl<F: AggregatePriceFormat + ?Sized> AggregatePriceFormat for Box<F> {
    fn extract_side(&self, aggregate: &str, side: PriceSide) -> String {
        (**self).extract_side(aggregate, side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_parsing() {
        assert_eq!(PriceSide::from_selector(""), PriceSide::Left);
        assert_eq!(PriceSide::from_selector("left"), PriceSide::Left);
        assert_eq!(PriceSide::from_selector("right"), PriceSide::Right);
        assert_eq!(PriceSide::from_selector("RIGHT"), PriceSide::Right);
    }

    #[test]
    fn test_default_range_format() {
        let format = DelimitedAggregate::default();
        assert_eq!(format.extract_side("kr 80 - kr 100", PriceSide::Left), "kr 80 ");
        assert_eq!(format.extract_side("kr 80 - kr 100", PriceSide::Right), " kr 100");
    }

    #[test]
    fn test_custom_delimiter() {
        let format = DelimitedAggregate::new("###");
        assert_eq!(format.extract_side("80 kr###100 kr", PriceSide::Left), "80 kr");
        assert_eq!(format.extract_side("80 kr###100 kr", PriceSide::Right), "100 kr");
    }

    #[test]
    fn test_splits_on_first_delimiter_only() {
        let format = DelimitedAggregate::default();
        assert_eq!(format.extract_side("1-2-3", PriceSide::Left), "1");
        assert_eq!(format.extract_side("1-2-3", PriceSide::Right), "2-3");
    }

    #[test]
    fn test_malformed_degrades_to_empty() {
        let format = DelimitedAggregate::new("###");
        assert_eq!(format.extract_side("100 kr", PriceSide::Left), "");
        assert_eq!(format.extract_side("100 kr", PriceSide::Right), "");
        assert_eq!(format.extract_side("", PriceSide::Right), "");

        let empty = DelimitedAggregate::new("");
        assert_eq!(empty.extract_side("80-100", PriceSide::Left), "");
    }

    #[test]
    fn test_trait_object() {
        let format: Box<dyn AggregatePriceFormat> = Box::new(DelimitedAggregate::new("|"));
        assert_eq!(format.extract_side("a|b", PriceSide::Right), "b");
    }
}

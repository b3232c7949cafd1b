use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Clothing,
    Accessories,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Electronics,
        Category::Clothing,
        Category::Accessories,
    ];

    /// Wire name used by fixtures and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Clothing => "clothing",
            Category::Accessories => "accessories",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Accessories => "Accessories",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product record. Items are created once per mount and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Unit price, non-negative.
    pub price: f64,
    pub category: Category,
    pub stock: u32,
}

/// Availability of a card's add action, derived from stock alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    OutOfStock,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>, price: f64, category: Category, stock: u32) -> Self {
        Self {
            id: ItemId(id),
            name: name.into(),
            price,
            category,
            stock,
        }
    }

    pub fn availability(&self) -> Availability {
        if self.stock == 0 {
            Availability::OutOfStock
        } else {
            Availability::Available
        }
    }

    pub fn is_available(&self) -> bool {
        self.availability() == Availability::Available
    }

    /// Price multiplied by stock on hand.
    pub fn stock_value(&self) -> f64 {
        self.price * f64::from(self.stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!(Category::parse("Clothing"), Some(Category::Clothing));
        assert_eq!(Category::parse(" accessories "), Some(Category::Accessories));
        assert_eq!(Category::parse("toys"), None);
    }

    #[test]
    fn availability_follows_stock() {
        let mut item = Item::new(1, "Lamp", 10.0, Category::Accessories, 0);
        assert_eq!(item.availability(), Availability::OutOfStock);
        item.stock = 3;
        assert_eq!(item.availability(), Availability::Available);
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Electronics).unwrap();
        assert_eq!(json, "\"electronics\"");
    }
}

use serde::{Deserialize, Serialize};

use crate::catalog::item::Item;

/// Business thresholds applied by the stats panel and item cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatalogRules {
    /// Items with `0 < stock < low_stock_threshold` count as low stock.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
    /// Prices strictly above this get the discount.
    #[serde(default = "default_discount_threshold")]
    pub discount_threshold: f64,
    /// Fraction taken off discounted prices.
    #[serde(default = "default_discount_rate")]
    pub discount_rate: f64,
}

fn default_low_stock_threshold() -> u32 {
    10
}

fn default_discount_threshold() -> f64 {
    100.0
}

fn default_discount_rate() -> f64 {
    0.10
}

impl Default for CatalogRules {
    fn default() -> Self {
        Self {
            low_stock_threshold: default_low_stock_threshold(),
            discount_threshold: default_discount_threshold(),
            discount_rate: default_discount_rate(),
        }
    }
}

/// Displayed price of one item after the discount rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPrice {
    pub discount: f64,
    pub final_price: f64,
}

impl CardPrice {
    pub fn has_discount(&self) -> bool {
        self.discount > 0.0
    }

    /// `$899.10`
    pub fn final_label(&self) -> String {
        format_money(self.final_price)
    }

    pub fn savings_label(&self) -> Option<String> {
        self.has_discount()
            .then(|| format!("Save {}!", format_money(self.discount)))
    }
}

impl CatalogRules {
    pub fn price(&self, item: &Item) -> CardPrice {
        let discount = if item.price > self.discount_threshold {
            item.price * self.discount_rate
        } else {
            0.0
        };
        CardPrice {
            discount,
            final_price: item.price - discount,
        }
    }

    pub fn is_low_stock(&self, item: &Item) -> bool {
        item.stock > 0 && item.stock < self.low_stock_threshold
    }
}

/// Two-decimal dollar amount.
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

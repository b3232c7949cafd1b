use crate::catalog::item::Item;
use crate::catalog::rules::{format_money, CatalogRules};

/// Aggregates over the complete, unfiltered item set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SummaryStats {
    pub total: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub total_value: f64,
}

impl SummaryStats {
    pub fn compute(items: &[Item], rules: &CatalogRules) -> Self {
        items.iter().fold(Self::default(), |mut acc, item| {
            acc.total += 1;
            if item.is_available() {
                acc.in_stock += 1;
            }
            if rules.is_low_stock(item) {
                acc.low_stock += 1;
            }
            acc.total_value += item.stock_value();
            acc
        })
    }

    pub fn total_value_label(&self) -> String {
        format_money(self.total_value)
    }
}

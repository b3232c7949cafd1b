use crate::catalog::{CatalogRules, CategoryFilter, Item, SortKey};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CatalogIntent {
    /// One-time population of the item set at mount.
    Load {
        items: Vec<Item>,
        rules: CatalogRules,
    },
    SetQuery(String),
    SetCategory(CategoryFilter),
    SetSort(SortKey),
}

impl Intent for CatalogIntent {}

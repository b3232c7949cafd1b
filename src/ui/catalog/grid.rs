//! Card models for the item grid, keyed by item id.

use std::collections::HashMap;
use std::sync::Arc;

use crate::catalog::{Availability, CardPrice, CatalogRules, Item, ItemId};

/// Everything one card displays. Built from its own item and nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub item: Item,
    pub price: CardPrice,
    pub availability: Availability,
}

impl CardView {
    pub fn build(item: &Item, rules: &CatalogRules) -> Self {
        Self {
            item: item.clone(),
            price: rules.price(item),
            availability: item.availability(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.item.id
    }

    pub fn can_add(&self) -> bool {
        self.availability == Availability::Available
    }
}

/// Ordered card models mirroring the derived view.
///
/// `sync` reuses the existing model of every item whose data did not change,
/// so re-sorting or re-filtering only rebuilds cards that are new to the grid.
#[derive(Debug, Default)]
pub struct GridModel {
    cards: Vec<Arc<CardView>>,
    rules: Option<CatalogRules>,
    revision: u64,
}

impl GridModel {
    pub fn cards(&self) -> &[Arc<CardView>] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<CardView>> {
        self.cards.get(index)
    }

    /// View revision this model was last synced against.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn sync(&mut self, view: &[Item], rules: &CatalogRules, revision: u64) {
        if self.rules.as_ref() != Some(rules) {
            self.cards.clear();
            self.rules = Some(*rules);
        }
        let mut previous: HashMap<ItemId, Arc<CardView>> = self
            .cards
            .drain(..)
            .map(|card| (card.id(), card))
            .collect();
        self.cards = view
            .iter()
            .map(|item| match previous.remove(&item.id) {
                Some(card) if card.item == *item => card,
                _ => Arc::new(CardView::build(item, rules)),
            })
            .collect();
        self.revision = revision;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    #[test]
    fn changed_item_gets_a_fresh_card() {
        let rules = CatalogRules::default();
        let mut item = Item::new(1, "Lamp", 40.0, Category::Accessories, 0);
        let mut grid = GridModel::default();
        grid.sync(std::slice::from_ref(&item), &rules, 1);
        let before = Arc::clone(&grid.cards()[0]);
        assert!(!before.can_add());

        item.stock = 4;
        grid.sync(std::slice::from_ref(&item), &rules, 2);
        assert!(!Arc::ptr_eq(&before, &grid.cards()[0]));
        assert!(grid.cards()[0].can_add());
    }
}

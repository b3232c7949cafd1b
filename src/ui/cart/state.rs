use crate::catalog::Item;
use crate::ui::mvi::UiState;

/// Append-only selection owned by the item grid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartState {
    items: Vec<Item>,
}

impl UiState for CartState {}

impl CartState {
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(super) fn push(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }
}

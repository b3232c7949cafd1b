use crate::catalog::Item;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CartIntent {
    /// Append an item. Ignored when the item is out of stock.
    Add { item: Item },
}

impl Intent for CartIntent {}

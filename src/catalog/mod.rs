//! Framework-agnostic catalog core: items, filtering, sorting, aggregation.
//!
//! Everything here is pure. The terminal layer in [`crate::ui`] owns the
//! state and calls into these functions from its reducers.

mod filter;
mod fixture;
mod item;
mod rules;
mod stats;

pub use filter::{
    derive_view, locale_cmp, name_contains, CategoryFilter, FilterState, NameOrder, SortKey,
};
pub use fixture::{
    parse_items, source_for, validate_items, BuiltinFixture, FixtureError, FixtureSource,
    JsonFixture,
};
pub use item::{Availability, Category, Item, ItemId};
pub use rules::{format_money, CardPrice, CatalogRules};
pub use stats::SummaryStats;

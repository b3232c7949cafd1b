//! The catalog state holder and the capabilities it hands to components.
//!
//! Components never see [`CatalogStore`] itself. Each one asks for the narrow
//! trait it needs: the filter bar reads [`FilterSource`] and writes through
//! [`FilterSink`], the stats bar reads [`StatsSource`], the grid reads
//! [`ViewSource`].

use crate::catalog::{CatalogRules, CategoryFilter, FilterState, Item, SortKey, SummaryStats};
use crate::ui::catalog::intent::CatalogIntent;
use crate::ui::catalog::reducer::CatalogReducer;
use crate::ui::catalog::state::CatalogState;
use crate::ui::mvi::dispatch_mvi;

pub trait FilterSource {
    fn filter(&self) -> &FilterState;
}

/// Setters routed back through the holder. Each updates exactly one field.
pub trait FilterSink {
    fn set_query(&mut self, query: String);
    fn set_category(&mut self, category: CategoryFilter);
    fn set_sort(&mut self, sort: SortKey);
}

pub trait ViewSource {
    /// Filtered and sorted items currently on display.
    fn view(&self) -> &[Item];
    fn view_revision(&self) -> u64;
    fn rules(&self) -> &CatalogRules;
}

pub trait StatsSource {
    fn stats(&self) -> &SummaryStats;
    fn stats_revision(&self) -> u64;
}

#[derive(Debug, Default)]
pub struct CatalogStore {
    state: CatalogState,
}

impl CatalogStore {
    /// Store populated with `items`. Called once per mount.
    pub fn load(items: Vec<Item>, rules: CatalogRules) -> Self {
        let mut store = Self::default();
        store.dispatch(CatalogIntent::Load { items, rules });
        store
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Full unfiltered item set.
    pub fn items(&self) -> &[Item] {
        &self.state.items
    }

    pub fn dispatch(&mut self, intent: CatalogIntent) {
        match &intent {
            CatalogIntent::Load { items, .. } => {
                tracing::info!(count = items.len(), "catalog items loaded");
            }
            CatalogIntent::SetQuery(query) => tracing::debug!(%query, "search term changed"),
            CatalogIntent::SetCategory(category) => {
                tracing::debug!(category = category.as_str(), "category changed");
            }
            CatalogIntent::SetSort(sort) => tracing::debug!(sort = sort.as_str(), "sort changed"),
        }
        dispatch_mvi!(self, state, CatalogReducer, intent);
    }
}

impl FilterSource for CatalogStore {
    fn filter(&self) -> &FilterState {
        &self.state.filter
    }
}

impl FilterSink for CatalogStore {
    fn set_query(&mut self, query: String) {
        self.dispatch(CatalogIntent::SetQuery(query));
    }

    fn set_category(&mut self, category: CategoryFilter) {
        self.dispatch(CatalogIntent::SetCategory(category));
    }

    fn set_sort(&mut self, sort: SortKey) {
        self.dispatch(CatalogIntent::SetSort(sort));
    }
}

impl ViewSource for CatalogStore {
    fn view(&self) -> &[Item] {
        &self.state.view
    }

    fn view_revision(&self) -> u64 {
        self.state.view_revision
    }

    fn rules(&self) -> &CatalogRules {
        &self.state.rules
    }
}

impl StatsSource for CatalogStore {
    fn stats(&self) -> &SummaryStats {
        &self.state.stats
    }

    fn stats_revision(&self) -> u64 {
        self.state.items_revision
    }
}

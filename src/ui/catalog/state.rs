use crate::catalog::{CatalogRules, FilterState, Item, SummaryStats};
use crate::ui::mvi::UiState;

/// Everything the catalog view renders from.
///
/// `view` and `stats` are derived from `items` and `filter`; the reducer keeps
/// them in step so no draw ever sees a stale pair.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState {
    pub items: Vec<Item>,
    pub rules: CatalogRules,
    pub filter: FilterState,
    pub view: Vec<Item>,
    pub stats: SummaryStats,
    /// Bumped whenever `items` (and therefore `stats`) changes.
    pub items_revision: u64,
    /// Bumped whenever `view` changes.
    pub view_revision: u64,
}

impl UiState for CatalogState {}

impl CatalogState {
    pub fn is_loaded(&self) -> bool {
        self.items_revision > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unloaded_and_empty() {
        let state = CatalogState::default();
        assert!(!state.is_loaded());
        assert!(state.view.is_empty());
        assert_eq!(state.stats, SummaryStats::default());
    }
}

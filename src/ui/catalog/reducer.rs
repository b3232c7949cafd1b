use crate::catalog::{derive_view, SummaryStats};
use crate::ui::catalog::intent::CatalogIntent;
use crate::ui::catalog::state::CatalogState;
use crate::ui::mvi::Reducer;

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::Load { items, rules } => {
                let stats = SummaryStats::compute(&items, &rules);
                let view = derive_view(&items, &state.filter);
                CatalogState {
                    items,
                    rules,
                    view,
                    stats,
                    items_revision: state.items_revision + 1,
                    view_revision: state.view_revision + 1,
                    ..state
                }
            }
            CatalogIntent::SetQuery(query) => {
                if state.filter.query == query {
                    return state;
                }
                let mut state = state;
                state.filter.query = query;
                refresh_view(state)
            }
            CatalogIntent::SetCategory(category) => {
                if state.filter.category == category {
                    return state;
                }
                let mut state = state;
                state.filter.category = category;
                refresh_view(state)
            }
            CatalogIntent::SetSort(sort) => {
                if state.filter.sort == sort {
                    return state;
                }
                let mut state = state;
                state.filter.sort = sort;
                refresh_view(state)
            }
        }
    }
}

/// Filter changes never touch `items` or `stats`.
fn refresh_view(mut state: CatalogState) -> CatalogState {
    state.view = derive_view(&state.items, &state.filter);
    state.view_revision += 1;
    state
}

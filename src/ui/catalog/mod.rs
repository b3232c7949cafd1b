//! The catalog route: state holder, filter bar, stats bar and item grid.

mod grid;
mod intent;
mod page;
mod reducer;
mod state;
mod store;
mod view;

pub use grid::{CardView, GridModel};
pub use intent::CatalogIntent;
pub use page::{CatalogFocus, CatalogPage};
pub use reducer::CatalogReducer;
pub use state::CatalogState;
pub use store::{CatalogStore, FilterSink, FilterSource, StatsSource, ViewSource};
pub use view::{
    grid_columns, item_card, render_catalog, render_filter_bar, render_item_grid,
    render_stats_bar, CARD_HEIGHT, CARD_WIDTH,
};

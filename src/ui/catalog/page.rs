use crate::catalog::{CatalogRules, FixtureError, FixtureSource, Item};
use crate::error::ContractViolation;
use crate::ui::cart::{CartIntent, CartReducer, CartState};
use crate::ui::catalog::grid::GridModel;
use crate::ui::catalog::store::{CatalogStore, FilterSink, FilterSource, ViewSource};
use crate::ui::mvi::dispatch_mvi;

/// Which catalog control receives keyboard input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum CatalogFocus {
    #[default]
    Search,
    Category,
    Sort,
    Grid,
}

impl CatalogFocus {
    const ORDER: [CatalogFocus; 4] = [
        CatalogFocus::Search,
        CatalogFocus::Category,
        CatalogFocus::Sort,
        CatalogFocus::Grid,
    ];

    pub fn next(self) -> Self {
        self.step(1)
    }

    pub fn prev(self) -> Self {
        self.step(Self::ORDER.len() - 1)
    }

    fn step(self, by: usize) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + by) % Self::ORDER.len()]
    }
}

/// The catalog route: state holder, grid-local cart and card models.
///
/// A page starts unmounted. [`CatalogPage::mount`] loads the fixture once;
/// later calls are no-ops until the page is dropped by navigation.
#[derive(Debug, Default)]
pub struct CatalogPage {
    store: Option<CatalogStore>,
    cart: CartState,
    grid: GridModel,
    focus: CatalogFocus,
    selected: usize,
    columns: usize,
    loads: usize,
}

impl CatalogPage {
    pub fn new() -> Self {
        Self {
            columns: 1,
            ..Self::default()
        }
    }

    pub fn mount(
        &mut self,
        source: &dyn FixtureSource,
        rules: CatalogRules,
    ) -> Result<(), FixtureError> {
        if self.store.is_some() {
            tracing::debug!("catalog already mounted, skipping load");
            return Ok(());
        }
        let items = source.load()?;
        tracing::info!(source = %source.describe(), "catalog mounted");
        let store = CatalogStore::load(items, rules);
        self.grid
            .sync(store.view(), store.rules(), store.view_revision());
        self.store = Some(store);
        self.loads += 1;
        Ok(())
    }

    pub fn is_mounted(&self) -> bool {
        self.store.is_some()
    }

    /// Number of fixture loads performed by this page.
    pub fn load_count(&self) -> usize {
        self.loads
    }

    /// The state holder, or a contract violation naming `component`.
    pub fn provider(&self, component: &'static str) -> Result<&CatalogStore, ContractViolation> {
        self.store
            .as_ref()
            .ok_or(ContractViolation::MissingProvider { component })
    }

    fn provider_mut(
        &mut self,
        component: &'static str,
    ) -> Result<&mut CatalogStore, ContractViolation> {
        self.store
            .as_mut()
            .ok_or(ContractViolation::MissingProvider { component })
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn focus(&self) -> CatalogFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: CatalogFocus) {
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Index of the highlighted card in the grid.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns.max(1);
    }

    // ========================================================================
    // Filter controls
    // ========================================================================

    pub fn push_query_char(&mut self, ch: char) -> Result<(), ContractViolation> {
        let store = self.provider_mut("FilterBar")?;
        let mut query = store.filter().query.clone();
        query.push(ch);
        store.set_query(query);
        self.after_filter_change();
        Ok(())
    }

    pub fn pop_query_char(&mut self) -> Result<(), ContractViolation> {
        let store = self.provider_mut("FilterBar")?;
        let mut query = store.filter().query.clone();
        if query.pop().is_none() {
            return Ok(());
        }
        store.set_query(query);
        self.after_filter_change();
        Ok(())
    }

    pub fn cycle_category(&mut self, step: i32) -> Result<(), ContractViolation> {
        let store = self.provider_mut("FilterBar")?;
        let next = store.filter().category.cycle(step);
        store.set_category(next);
        self.after_filter_change();
        Ok(())
    }

    pub fn cycle_sort(&mut self, step: i32) -> Result<(), ContractViolation> {
        let store = self.provider_mut("FilterBar")?;
        let next = store.filter().sort.cycle(step);
        store.set_sort(next);
        self.after_filter_change();
        Ok(())
    }

    /// Resyncs card models when the derived view moved on.
    fn after_filter_change(&mut self) {
        let Some(store) = self.store.as_ref() else {
            return;
        };
        if store.view_revision() != self.grid.revision() {
            self.grid
                .sync(store.view(), store.rules(), store.view_revision());
        }
        self.clamp_selection();
    }

    // ========================================================================
    // Item grid
    // ========================================================================

    pub fn move_selection(&mut self, delta: isize) {
        if self.grid.is_empty() {
            self.selected = 0;
            return;
        }
        let last = self.grid.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    pub fn move_selection_rows(&mut self, rows: isize) {
        self.move_selection(rows * self.columns as isize);
    }

    /// Adds the highlighted card's item to the cart.
    ///
    /// Returns the added item, or `None` when nothing is highlighted or the
    /// item is out of stock.
    pub fn add_selected_to_cart(&mut self) -> Result<Option<Item>, ContractViolation> {
        self.provider("ItemGrid")?;
        let Some(card) = self.grid.get(self.selected) else {
            return Ok(None);
        };
        if !card.can_add() {
            return Ok(None);
        }
        let item = card.item.clone();
        self.add_to_cart(item.clone());
        tracing::debug!(item = %item.name, cart = self.cart.len(), "added to cart");
        Ok(Some(item))
    }

    fn add_to_cart(&mut self, item: Item) {
        dispatch_mvi!(self, cart, CartReducer, CartIntent::Add { item });
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.grid.len().saturating_sub(1));
    }
}

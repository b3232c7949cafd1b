//! Filter state and the derived view pipeline (filter, then sort).

use std::cmp::Ordering;

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};

use crate::catalog::item::{Category, Item};

/// Category selector. `All` disables category filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const OPTIONS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Electronics),
        CategoryFilter::Only(Category::Clothing),
        CategoryFilter::Only(Category::Accessories),
    ];

    /// Unrecognized values select everything.
    pub fn parse(value: &str) -> Self {
        Category::parse(value).map_or(CategoryFilter::All, CategoryFilter::Only)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    /// Next option in display order, wrapping.
    pub fn cycle(&self, step: i32) -> Self {
        cycle_option(&Self::OPTIONS, self, step)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    NameAsc,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    pub const OPTIONS: [SortKey; 3] = [SortKey::NameAsc, SortKey::PriceAsc, SortKey::PriceDesc];

    /// Unrecognized values fall back to name ordering.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("price-low") {
            SortKey::PriceAsc
        } else if value.eq_ignore_ascii_case("price-high") {
            SortKey::PriceDesc
        } else {
            SortKey::NameAsc
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name",
            SortKey::PriceAsc => "price-low",
            SortKey::PriceDesc => "price-high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "Name",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
        }
    }

    pub fn cycle(&self, step: i32) -> Self {
        cycle_option(&Self::OPTIONS, self, step)
    }

    fn compare(&self, names: &NameOrder, a: &Item, b: &Item) -> Ordering {
        match self {
            SortKey::NameAsc => names.compare(&a.name, &b.name),
            SortKey::PriceAsc => a.price.total_cmp(&b.price),
            SortKey::PriceDesc => b.price.total_cmp(&a.price),
        }
    }
}

fn cycle_option<T: Copy + PartialEq>(options: &[T], current: &T, step: i32) -> T {
    let len = options.len() as i32;
    let index = options.iter().position(|o| o == current).unwrap_or(0) as i32;
    options[(index + step).rem_euclid(len) as usize]
}

/// The three user-controlled inputs of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub query: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

impl FilterState {
    pub fn matches(&self, item: &Item) -> bool {
        self.category.matches(item.category) && name_contains(&item.name, &self.query)
    }
}

/// Case-insensitive substring test; an empty needle matches everything.
pub fn name_contains(name: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Root-locale collation at tertiary strength: base letters first, then
/// accents, then case (lowercase before uppercase).
pub struct NameOrder {
    collator: Option<CollatorBorrowed<'static>>,
}

impl NameOrder {
    pub fn new() -> Self {
        let mut options = CollatorOptions::default();
        options.strength = Some(Strength::Tertiary);
        let collator = match Collator::try_new(Default::default(), options) {
            Ok(collator) => Some(collator),
            Err(err) => {
                tracing::warn!(error = %err, "collation data unavailable, sorting by code point");
                None
            }
        };
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        }
    }
}

impl Default for NameOrder {
    fn default() -> Self {
        Self::new()
    }
}

/// One-off comparison with [`NameOrder`].
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    NameOrder::new().compare(a, b)
}

/// Filtered and sorted copy of `items`. The source slice is left untouched and
/// ties keep their source order.
pub fn derive_view(items: &[Item], filter: &FilterState) -> Vec<Item> {
    let mut view: Vec<Item> = items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect();
    let names = NameOrder::new();
    view.sort_by(|a, b| filter.sort.compare(&names, a, b));
    view
}

//! Item sources loaded by the catalog page at mount.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::item::{Category, Item};

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse fixture '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid fixture: {message}")]
    Invalid { message: String },
}

/// Something the catalog can load its item set from.
pub trait FixtureSource {
    fn load(&self) -> Result<Vec<Item>, FixtureError>;

    /// Short human-readable name for logs.
    fn describe(&self) -> String;
}

/// The eight sample products shipped with the app.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFixture;

impl FixtureSource for BuiltinFixture {
    fn load(&self) -> Result<Vec<Item>, FixtureError> {
        Ok(vec![
            Item::new(1, "Laptop", 999.0, Category::Electronics, 5),
            Item::new(2, "Phone", 699.0, Category::Electronics, 12),
            Item::new(3, "Shirt", 29.0, Category::Clothing, 50),
            Item::new(4, "Shoes", 79.0, Category::Clothing, 30),
            Item::new(5, "Watch", 199.0, Category::Accessories, 8),
            Item::new(6, "Headphones", 149.0, Category::Electronics, 15),
            Item::new(7, "Backpack", 59.0, Category::Accessories, 20),
            Item::new(8, "Jacket", 120.0, Category::Clothing, 10),
        ])
    }

    fn describe(&self) -> String {
        "builtin".to_string()
    }
}

/// JSON array of `{id, name, price, category, stock}` records.
#[derive(Debug, Clone)]
pub struct JsonFixture {
    path: PathBuf,
}

impl JsonFixture {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FixtureSource for JsonFixture {
    fn load(&self) -> Result<Vec<Item>, FixtureError> {
        let content = fs::read_to_string(&self.path).map_err(|e| FixtureError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        let items = parse_items(&content).map_err(|e| FixtureError::Parse {
            path: self.path.clone(),
            source: e,
        })?;
        validate_items(&items)?;
        Ok(items)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

pub fn parse_items(json: &str) -> Result<Vec<Item>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Rejects duplicate ids and negative or non-finite prices.
pub fn validate_items(items: &[Item]) -> Result<(), FixtureError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id) {
            return Err(FixtureError::Invalid {
                message: format!("duplicate item id {}", item.id),
            });
        }
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(FixtureError::Invalid {
                message: format!("item {} has invalid price {}", item.id, item.price),
            });
        }
    }
    Ok(())
}

/// Source selected by CLI/config: a JSON file when given, else the builtin set.
pub fn source_for(path: Option<&Path>) -> Box<dyn FixtureSource> {
    match path {
        Some(path) => Box::new(JsonFixture::new(path)),
        None => Box::new(BuiltinFixture),
    }
}

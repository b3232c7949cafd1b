use clap::{Parser, Subcommand};
use std::fmt::Write;
use std::path::PathBuf;

use crate::catalog::{
    derive_view, CatalogRules, CategoryFilter, FilterState, Item, SortKey, SummaryStats,
};
use crate::ui::router::Route;

#[derive(Debug, Parser)]
#[command(name = "shopfront", version, about = "Product catalog assessment in the terminal")]
pub struct Cli {
    /// Config file (defaults to <config_dir>/shopfront/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON item fixture overriding the builtin sample set
    #[arg(long, global = true)]
    pub fixture: Option<PathBuf>,

    /// Page to open at startup: home or catalog
    #[arg(long, default_value = "home")]
    pub route: Route,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the filtered catalog and its summary without starting the UI
    List {
        /// Case-insensitive name filter
        #[arg(long, default_value = "")]
        query: String,

        /// all, electronics, clothing or accessories
        #[arg(long, default_value = "all")]
        category: String,

        /// name, price-low or price-high
        #[arg(long, default_value = "name")]
        sort: String,
    },
}

impl Command {
    pub fn filter(&self) -> FilterState {
        match self {
            Command::List {
                query,
                category,
                sort,
            } => FilterState {
                query: query.clone(),
                category: CategoryFilter::parse(category),
                sort: SortKey::parse(sort),
            },
        }
    }
}

/// Plain-text listing: one line per derived item, then the summary.
pub fn render_listing(items: &[Item], filter: &FilterState, rules: &CatalogRules) -> String {
    let mut out = String::new();
    for item in derive_view(items, filter) {
        let price = rules.price(&item);
        let _ = write!(
            out,
            "{:>4}  {:<12} {:<12} {:>10}  stock {:>3}",
            item.id.0,
            item.name,
            item.category.as_str(),
            price.final_label(),
            item.stock
        );
        if let Some(savings) = price.savings_label() {
            let _ = write!(out, "  {savings}");
        }
        out.push('\n');
    }
    let stats = SummaryStats::compute(items, rules);
    let _ = writeln!(
        out,
        "total {}  in stock {}  low stock {}  value {}",
        stats.total,
        stats.in_stock,
        stats.low_stock,
        stats.total_value_label()
    );
    out
}

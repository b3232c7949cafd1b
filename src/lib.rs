//! A two-page product catalog for the terminal.
//!
//! [`catalog`] holds the pure data pipeline (filter, sort, aggregate);
//! [`ui`] drives it from a ratatui front end through MVI reducers.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;

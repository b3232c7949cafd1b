//! Shared test fixtures and helpers.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use shopfront::catalog::{BuiltinFixture, Category, FixtureError, FixtureSource, Item};
use shopfront::config::Config;
use shopfront::error::ContractViolation;
use shopfront::ui::app::App;
use shopfront::ui::render::draw;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub fn sample_items() -> Vec<Item> {
    BuiltinFixture.load().expect("builtin fixture loads")
}

pub fn names(items: &[Item]) -> Vec<&str> {
    items.iter().map(|item| item.name.as_str()).collect()
}

/// Fixture source that counts how often it is loaded.
#[derive(Clone)]
pub struct CountingFixture {
    pub items: Vec<Item>,
    pub loads: Arc<AtomicUsize>,
}

impl CountingFixture {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_sold_out_item() -> Self {
        let mut items = sample_items();
        items.push(Item::new(9, "Umbrella", 25.0, Category::Accessories, 0));
        Self::new(items)
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl FixtureSource for CountingFixture {
    fn load(&self) -> Result<Vec<Item>, FixtureError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.items.clone())
    }

    fn describe(&self) -> String {
        "counting".to_string()
    }
}

pub fn app_with(fixture: CountingFixture) -> App {
    App::new(Config::default(), Box::new(fixture))
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

/// Draw the app into an off-screen buffer and return its text, row by row.
pub fn render_to_string(app: &App, width: u16, height: u16) -> Result<String, ContractViolation> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    let mut drawn = Ok(());
    terminal
        .draw(|frame| drawn = draw(frame, app))
        .expect("draw succeeds");
    drawn?;
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..height {
        for x in 0..width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    Ok(text)
}

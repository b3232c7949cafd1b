mod common;

use common::{app_with, ctrl, key, render_to_string, CountingFixture};
use crossterm::event::KeyCode;
use shopfront::catalog::{BuiltinFixture, CatalogRules};
use shopfront::config::Config;
use shopfront::error::ContractViolation;
use shopfront::ui::app::App;
use shopfront::ui::catalog::{render_item_grid, CatalogFocus, CatalogPage};
use shopfront::ui::input::handle_key;
use shopfront::ui::router::Route;

// -- mount lifecycle -----------------------------------------------------

#[test]
fn entering_catalog_loads_fixture_once() {
    let fixture = CountingFixture::new(common::sample_items());
    let mut app = app_with(fixture.clone());
    assert_eq!(fixture.load_count(), 0);

    app.navigate(Route::Catalog).unwrap();
    assert_eq!(fixture.load_count(), 1);

    for ch in "sh".chars() {
        handle_key(&mut app, key(KeyCode::Char(ch))).unwrap();
    }
    handle_key(&mut app, key(KeyCode::Tab)).unwrap();
    handle_key(&mut app, key(KeyCode::Right)).unwrap();
    app.on_tick();
    app.navigate(Route::Catalog).unwrap();
    render_to_string(&app, 120, 40).unwrap();

    assert_eq!(fixture.load_count(), 1);
    assert_eq!(app.catalog().unwrap().load_count(), 1);
}

#[test]
fn second_mount_call_is_a_noop() {
    let fixture = CountingFixture::new(common::sample_items());
    let mut page = CatalogPage::new();
    page.mount(&fixture, CatalogRules::default()).unwrap();
    page.mount(&fixture, CatalogRules::default()).unwrap();
    assert_eq!(fixture.load_count(), 1);
    assert_eq!(page.load_count(), 1);
}

#[test]
fn remount_resets_cart_and_filters() {
    let fixture = CountingFixture::new(common::sample_items());
    let mut app = app_with(fixture.clone());
    app.navigate(Route::Catalog).unwrap();
    handle_key(&mut app, key(KeyCode::Char('p'))).unwrap();
    app.catalog_mut().unwrap().set_focus(CatalogFocus::Grid);
    handle_key(&mut app, key(KeyCode::Enter)).unwrap();
    assert_eq!(app.catalog().unwrap().cart().len(), 1);

    handle_key(&mut app, key(KeyCode::Esc)).unwrap();
    assert_eq!(app.route(), Route::Home);
    assert!(app.catalog().is_none());

    app.navigate(Route::Catalog).unwrap();
    let page = app.catalog().unwrap();
    assert!(page.cart().is_empty());
    assert_eq!(page.provider("FilterBar").unwrap().state().filter.query, "");
    assert_eq!(fixture.load_count(), 2);
}

// -- cart ------------------------------------------------------------------

#[test]
fn add_to_cart_appends_and_acknowledges() {
    let mut app = app_with(CountingFixture::new(common::sample_items()));
    app.navigate(Route::Catalog).unwrap();
    app.catalog_mut().unwrap().set_focus(CatalogFocus::Grid);

    handle_key(&mut app, key(KeyCode::Enter)).unwrap();
    handle_key(&mut app, key(KeyCode::Right)).unwrap();
    handle_key(&mut app, key(KeyCode::Enter)).unwrap();
    handle_key(&mut app, key(KeyCode::Left)).unwrap();
    handle_key(&mut app, key(KeyCode::Enter)).unwrap();

    let cart: Vec<&str> = app
        .catalog()
        .unwrap()
        .cart()
        .items()
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(cart, vec!["Backpack", "Headphones", "Backpack"]);

    let last = app.notifications().iter().last().unwrap();
    assert_eq!(last.message, "Added Backpack to cart!");
}

#[test]
fn sold_out_item_cannot_be_added() {
    let mut app = app_with(CountingFixture::with_sold_out_item());
    app.navigate(Route::Catalog).unwrap();
    for ch in "umbrella".chars() {
        handle_key(&mut app, key(KeyCode::Char(ch))).unwrap();
    }
    handle_key(&mut app, key(KeyCode::Enter)).unwrap();
    assert_eq!(app.catalog().unwrap().focus(), CatalogFocus::Grid);

    let added = app.add_selected_to_cart().unwrap();
    assert!(added.is_none());
    handle_key(&mut app, key(KeyCode::Enter)).unwrap();

    let page = app.catalog().unwrap();
    assert!(page.cart().is_empty());
    assert!(!page.grid().cards()[0].can_add());
    assert!(app.notifications().is_empty());

    let screen = render_to_string(&app, 120, 40).unwrap();
    assert!(screen.contains("[ Out of Stock ]"));
    assert!(!screen.contains("[ Add to Cart ]"));
}

// -- notifications -----------------------------------------------------------

#[test]
fn notifications_expire_after_configured_ticks() {
    let mut config = Config::default();
    config.ui.notification_ticks = 2;
    let mut app = App::new(config, Box::new(BuiltinFixture));
    app.navigate(Route::Catalog).unwrap();
    app.catalog_mut().unwrap().set_focus(CatalogFocus::Grid);
    app.add_selected_to_cart().unwrap();
    assert_eq!(app.notifications().len(), 1);

    app.on_tick();
    assert_eq!(app.notifications().len(), 1);
    app.on_tick();
    assert!(app.notifications().is_empty());
}

#[test]
fn notifications_can_be_dismissed() {
    let mut app = app_with(CountingFixture::new(common::sample_items()));
    handle_key(&mut app, key(KeyCode::Char('1'))).unwrap();
    assert_eq!(app.notifications().len(), 1);
    handle_key(&mut app, ctrl('d')).unwrap();
    assert!(app.notifications().is_empty());
}

// -- routing ---------------------------------------------------------------

#[test]
fn home_second_challenge_opens_catalog() {
    let mut app = app_with(CountingFixture::new(common::sample_items()));
    handle_key(&mut app, key(KeyCode::Down)).unwrap();
    handle_key(&mut app, key(KeyCode::Enter)).unwrap();
    assert_eq!(app.route(), Route::Catalog);
    assert!(app.catalog().unwrap().is_mounted());
}

#[test]
fn quit_keys() {
    let mut app = app_with(CountingFixture::new(common::sample_items()));
    handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();
    assert!(app.should_quit());

    let mut app = app_with(CountingFixture::new(common::sample_items()));
    app.navigate(Route::Catalog).unwrap();
    handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();
    assert!(!app.should_quit(), "q types into the search box");
    handle_key(&mut app, ctrl('q')).unwrap();
    assert!(app.should_quit());
}

// -- rendering -------------------------------------------------------------

#[test]
fn catalog_screen_shows_stats_filters_and_cards() {
    let mut app = app_with(CountingFixture::new(common::sample_items()));
    app.on_resize(120, 40);
    app.navigate(Route::Catalog).unwrap();
    let screen = render_to_string(&app, 120, 40).unwrap();

    assert!(screen.contains("Total Products"));
    assert!(screen.contains("$23410.00"));
    assert!(screen.contains("All Categories"));
    assert!(screen.contains("Cart Items: 0"));
    assert!(screen.contains("Jacket"));
    assert!(screen.contains("$108.00"));
    assert!(screen.contains("Save $12.00!"));
}

#[test]
fn empty_result_renders_message() {
    let mut app = app_with(CountingFixture::new(common::sample_items()));
    app.navigate(Route::Catalog).unwrap();
    for ch in "xyz".chars() {
        handle_key(&mut app, key(KeyCode::Char(ch))).unwrap();
    }
    let screen = render_to_string(&app, 120, 40).unwrap();
    assert!(screen.contains("No products match"));
    assert!(screen.contains("Total Products"));
}

#[test]
fn home_screen_lists_both_challenges() {
    let app = app_with(CountingFixture::new(common::sample_items()));
    let screen = render_to_string(&app, 120, 30).unwrap();
    assert!(screen.contains("Technical Assessment"));
    assert!(screen.contains("Open Challenge 1"));
    assert!(screen.contains("/legacy.html"));
    assert!(screen.contains("/products"));
}

#[test]
fn grid_without_provider_fails_loudly() {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    let page = CatalogPage::new();
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    let mut result = Ok(());
    terminal
        .draw(|frame| {
            let area = frame.area();
            result = render_item_grid(frame, area, &page);
        })
        .unwrap();
    assert_eq!(
        result,
        Err(ContractViolation::MissingProvider {
            component: "ItemGrid"
        })
    );
}

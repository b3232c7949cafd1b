use crate::catalog::FixtureSource;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::router::Route;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;

/// Run the interactive UI until the user quits.
///
/// Contract violations and mount failures end the session with an error
/// after the terminal has been restored.
pub fn run(config: Config, fixture: Box<dyn FixtureSource>, start: Route) -> anyhow::Result<()> {
    let tick_rate = config.ui.tick_rate();
    let mut app = App::new(config, fixture);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.navigate(start).context("failed to open start route")?;

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let events = EventHandler::new(tick_rate)?;
    tracing::info!(route = %start, "ui started");

    loop {
        let mut drawn = Ok(());
        terminal.draw(|frame| drawn = draw(frame, &app))?;
        drawn?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key)?,
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("ui stopped");
    Ok(())
}

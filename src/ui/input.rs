use crate::error::AppError;
use crate::ui::app::App;
use crate::ui::catalog::CatalogFocus;
use crate::ui::router::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<(), AppError> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return Ok(());
    }
    if is_ctrl_char(key, 'd') {
        app.dismiss_notification();
        return Ok(());
    }

    match app.route() {
        Route::Home => handle_home_key(app, key),
        Route::Catalog => handle_catalog_key(app, key),
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) -> Result<(), AppError> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Up | KeyCode::BackTab => app.home_mut().move_selection(-1),
        KeyCode::Down | KeyCode::Tab => app.home_mut().move_selection(1),
        KeyCode::Enter => app.activate_home_link()?,
        KeyCode::Char(ch @ ('1' | '2')) => {
            let index = ch.to_digit(10).unwrap_or(1) as usize - 1;
            app.home_mut().select(index);
            app.activate_home_link()?;
        }
        _ => {}
    }
    Ok(())
}

fn handle_catalog_key(app: &mut App, key: KeyEvent) -> Result<(), AppError> {
    match key.code {
        KeyCode::Esc => return app.navigate(Route::Home),
        KeyCode::Tab => {
            app.catalog_mut()?.focus_next();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.catalog_mut()?.focus_prev();
            return Ok(());
        }
        _ => {}
    }

    let focus = app.catalog_mut()?.focus();
    match focus {
        CatalogFocus::Search => {
            let page = app.catalog_mut()?;
            match key.code {
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    page.push_query_char(ch)?
                }
                KeyCode::Backspace => page.pop_query_char()?,
                KeyCode::Down | KeyCode::Enter => page.set_focus(CatalogFocus::Grid),
                _ => {}
            }
        }
        CatalogFocus::Category => match key.code {
            KeyCode::Left => app.catalog_mut()?.cycle_category(-1)?,
            KeyCode::Right | KeyCode::Enter => app.catalog_mut()?.cycle_category(1)?,
            _ => {}
        },
        CatalogFocus::Sort => match key.code {
            KeyCode::Left => app.catalog_mut()?.cycle_sort(-1)?,
            KeyCode::Right | KeyCode::Enter => app.catalog_mut()?.cycle_sort(1)?,
            _ => {}
        },
        CatalogFocus::Grid => match key.code {
            KeyCode::Left => app.catalog_mut()?.move_selection(-1),
            KeyCode::Right => app.catalog_mut()?.move_selection(1),
            KeyCode::Up => app.catalog_mut()?.move_selection_rows(-1),
            KeyCode::Down => app.catalog_mut()?.move_selection_rows(1),
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('a') => {
                app.add_selected_to_cart()?;
            }
            _ => {}
        },
    }
    Ok(())
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_detection_requires_modifier() {
        let plain = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let ctrl = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::CONTROL);
        assert!(!is_ctrl_char(plain, 'q'));
        assert!(is_ctrl_char(ctrl, 'q'));
    }
}

use crate::error::ContractViolation;
use crate::ui::app::App;
use crate::ui::catalog::render_catalog;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::home::render_home;
use crate::ui::layout::{corner_rect, layout_regions};
use crate::ui::notify::NotificationQueue;
use crate::ui::router::Route;
use crate::ui::theme::{HEADER_TEXT, TOAST_BORDER};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

/// Draw one frame. Pure with respect to `app`.
pub fn draw(frame: &mut Frame<'_>, app: &App) -> Result<(), ContractViolation> {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let cart_len = app.catalog().map(|page| page.cart().len());
    frame.render_widget(Header::new(app.route(), cart_len).widget(), header);
    frame.render_widget(Clear, body);
    match app.route() {
        Route::Home => render_home(frame, body, app.home()),
        Route::Catalog => {
            let page = app.catalog().ok_or(ContractViolation::MissingProvider {
                component: "CatalogView",
            })?;
            render_catalog(frame, body, page)?;
        }
    }
    frame.render_widget(Footer::new(app.route()).widget(footer), footer);

    render_notifications(frame, body, app.notifications());
    Ok(())
}

/// Toasts stacked upward from the bottom-right corner, newest lowest.
fn render_notifications(frame: &mut Frame<'_>, body: Rect, queue: &NotificationQueue) {
    let mut bottom = body;
    for notification in queue.iter().collect::<Vec<_>>().into_iter().rev() {
        let area = corner_rect(bottom, TOAST_WIDTH, TOAST_HEIGHT);
        if area.height < TOAST_HEIGHT {
            break;
        }
        frame.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(TOAST_BORDER));
        let line = Line::from(Span::styled(
            notification.message.clone(),
            Style::default().fg(HEADER_TEXT),
        ));
        frame.render_widget(Paragraph::new(line).block(block), area);
        bottom.height = bottom.height.saturating_sub(TOAST_HEIGHT);
    }
}

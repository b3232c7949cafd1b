use crate::ui::router::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    route: Route,
    cart_len: Option<usize>,
}

impl Header {
    pub fn new(route: Route, cart_len: Option<usize>) -> Self {
        Self { route, cart_len }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("●", Style::default().fg(STATUS_OK)),
            Span::styled("  ", text_style),
            Span::styled("shopfront", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.route.path(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.route.title(), text_style),
        ];
        if let Some(len) = self.cart_len {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(format!("cart {len}"), text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

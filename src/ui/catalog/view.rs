//! Catalog rendering. Every function here maps state to widgets and nothing else.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::catalog::Availability;
use crate::error::ContractViolation;
use crate::ui::catalog::grid::CardView;
use crate::ui::catalog::page::{CatalogFocus, CatalogPage};
use crate::ui::catalog::store::{FilterSource, StatsSource};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DISABLED, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, LOW_STOCK,
    MUTED_TEXT, SAVINGS,
};

pub const CARD_WIDTH: u16 = 30;
pub const CARD_HEIGHT: u16 = 8;

const INTRO: &str = "Browse the catalog. Tab moves between controls, Enter adds the highlighted item.";

/// Number of card columns that fit in a body of `width` cells.
pub fn grid_columns(width: u16) -> usize {
    (width / CARD_WIDTH).max(1) as usize
}

pub fn render_catalog(
    frame: &mut Frame<'_>,
    area: Rect,
    page: &CatalogPage,
) -> Result<(), ContractViolation> {
    let [intro, stats, filters, grid] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(INTRO, Style::default().fg(MUTED_TEXT)))),
        intro,
    );
    render_stats_bar(frame, stats, page.provider("StatsBar")?);
    render_filter_bar(frame, filters, page.provider("FilterBar")?, page.focus());
    render_item_grid(frame, grid, page)
}

pub fn render_stats_bar(frame: &mut Frame<'_>, area: Rect, stats: &dyn StatsSource) {
    let stats = stats.stats();
    let cells = [
        ("Total Products", stats.total.to_string(), HEADER_TEXT),
        ("In Stock", stats.in_stock.to_string(), HEADER_TEXT),
        ("Low Stock", stats.low_stock.to_string(), LOW_STOCK),
        ("Total Value", stats.total_value_label(), HEADER_TEXT),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(inner);
    for ((label, value, color), column) in cells.into_iter().zip(columns.iter()) {
        let lines = vec![
            Line::from(Span::styled(label, Style::default().fg(MUTED_TEXT))),
            Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), *column);
    }
}

pub fn render_filter_bar(
    frame: &mut Frame<'_>,
    area: Rect,
    filter: &dyn FilterSource,
    focus: CatalogFocus,
) {
    let filter = filter.filter();
    let [search, category, sort] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(area);

    let cursor = if focus == CatalogFocus::Search { "▏" } else { "" };
    let query = if filter.query.is_empty() && focus != CatalogFocus::Search {
        Span::styled("type to search", Style::default().fg(MUTED_TEXT))
    } else {
        Span::styled(
            format!("{}{}", filter.query, cursor),
            Style::default().fg(HEADER_TEXT),
        )
    };
    frame.render_widget(
        Paragraph::new(Line::from(query)).block(control_block(
            "Search products",
            focus == CatalogFocus::Search,
        )),
        search,
    );
    frame.render_widget(
        Paragraph::new(selector_line(filter.category.label())).block(control_block(
            "Category",
            focus == CatalogFocus::Category,
        )),
        category,
    );
    frame.render_widget(
        Paragraph::new(selector_line(filter.sort.label()))
            .block(control_block("Sort by", focus == CatalogFocus::Sort)),
        sort,
    );
}

fn control_block(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(title, Style::default().fg(MUTED_TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn selector_line(label: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("◀ ", Style::default().fg(MUTED_TEXT)),
        Span::styled(label, Style::default().fg(HEADER_TEXT)),
        Span::styled(" ▶", Style::default().fg(MUTED_TEXT)),
    ])
}

pub fn render_item_grid(
    frame: &mut Frame<'_>,
    area: Rect,
    page: &CatalogPage,
) -> Result<(), ContractViolation> {
    page.provider("ItemGrid")?;
    if area.height == 0 {
        return Ok(());
    }

    let [summary, cards_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("Cart Items: {}", page.cart().len()),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))),
        summary,
    );

    let grid = page.grid();
    if grid.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No products match the current filters.",
                Style::default().fg(MUTED_TEXT),
            )),
            cards_area,
        );
        return Ok(());
    }

    let columns = grid_columns(cards_area.width);
    let visible_rows = (cards_area.height / CARD_HEIGHT).max(1) as usize;
    let selected_row = page.selected() / columns;
    let first_row = (selected_row + 1).saturating_sub(visible_rows);

    for (index, card) in grid.cards().iter().enumerate().skip(first_row * columns) {
        let row = index / columns - first_row;
        if row >= visible_rows {
            break;
        }
        let col = index % columns;
        let rect = Rect {
            x: cards_area.x + col as u16 * CARD_WIDTH,
            y: cards_area.y + row as u16 * CARD_HEIGHT,
            width: CARD_WIDTH.min(cards_area.width),
            height: CARD_HEIGHT.min(cards_area.height.saturating_sub(row as u16 * CARD_HEIGHT)),
        };
        let highlighted = page.focus() == CatalogFocus::Grid && index == page.selected();
        frame.render_widget(item_card(card, highlighted), rect);
    }
    Ok(())
}

/// One product card.
pub fn item_card(card: &CardView, highlighted: bool) -> Paragraph<'static> {
    let item = &card.item;
    let mut lines = vec![
        Line::from(Span::styled(
            item.name.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            item.category.label(),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(Span::styled(
            card.price.final_label(),
            Style::default().fg(HEADER_TEXT),
        )),
    ];
    lines.push(match card.price.savings_label() {
        Some(savings) => Line::from(Span::styled(savings, Style::default().fg(SAVINGS))),
        None => Line::from(""),
    });
    lines.push(Line::from(format!("Stock: {}", item.stock)));
    lines.push(match card.availability {
        Availability::Available => Line::from(Span::styled(
            "[ Add to Cart ]",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Availability::OutOfStock => Line::from(Span::styled(
            "[ Out of Stock ]",
            Style::default().fg(DISABLED),
        )),
    });

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if highlighted { FOCUS_BORDER } else { GLOBAL_BORDER }));
    if highlighted {
        block = block.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }
    Paragraph::new(lines).block(block)
}

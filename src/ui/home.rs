use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::router::Route;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, SAVINGS,
};

/// Path of the standalone document behind the first challenge.
pub const LEGACY_DOCUMENT: &str = "/legacy.html";

/// Where a landing entry leads.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Link {
    /// Static document outside the app.
    External(&'static str),
    Route(Route),
}

pub struct Challenge {
    pub title: &'static str,
    pub description: &'static str,
    pub button: &'static str,
    pub link: Link,
}

pub const CHALLENGES: [Challenge; 2] = [
    Challenge {
        title: "Challenge 1: Vanilla JS → Components",
        description: "Convert a vanilla JavaScript/HTML application to a component model with proper state management.",
        button: "Open Challenge 1",
        link: Link::External(LEGACY_DOCUMENT),
    },
    Challenge {
        title: "Challenge 2: Fix Rendering Anti-patterns",
        description: "Identify and fix performance issues and anti-patterns in a poorly optimized component tree.",
        button: "Open Challenge 2",
        link: Link::Route(Route::Catalog),
    },
];

#[derive(Debug, Default)]
pub struct HomePage {
    selected: usize,
}

impl HomePage {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index.min(CHALLENGES.len() - 1);
    }

    pub fn move_selection(&mut self, direction: i32) {
        let len = CHALLENGES.len();
        self.selected = if direction.is_negative() {
            (self.selected + len - 1) % len
        } else {
            (self.selected + 1) % len
        };
    }

    pub fn activate(&self) -> Link {
        CHALLENGES[self.selected].link
    }
}

pub fn render_home(frame: &mut Frame<'_>, area: Rect, home: &HomePage) {
    let [title, intro, first, second] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(6),
        Constraint::Length(6),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Technical Assessment",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))),
        title,
    );
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Challenge Instructions",
                Style::default().fg(HEADER_TEXT),
            )),
            Line::from(Span::styled(
                "This assessment contains two challenges to evaluate your component skills:",
                Style::default().fg(MUTED_TEXT),
            )),
        ]),
        intro,
    );

    for (index, (challenge, rect)) in CHALLENGES.iter().zip([first, second]).enumerate() {
        let selected = index == home.selected();
        let accent = if index == 0 { ACCENT } else { SAVINGS };
        let target = match challenge.link {
            Link::External(path) => path,
            Link::Route(route) => route.path(),
        };
        let mut button_style = Style::default().fg(accent).add_modifier(Modifier::BOLD);
        if selected {
            button_style = button_style.bg(ACTIVE_HIGHLIGHT);
        }
        let lines = vec![
            Line::from(Span::styled(
                challenge.title,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                challenge.description,
                Style::default().fg(MUTED_TEXT),
            )),
            Line::from(vec![
                Span::styled(format!("[ {} ]", challenge.button), button_style),
                Span::styled(format!("  → {}", target), Style::default().fg(MUTED_TEXT)),
            ]),
        ];
        let border = if selected { FOCUS_BORDER } else { GLOBAL_BORDER };
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            ),
            rect,
        );
    }
}

//! The UI renders the application state into a fixed-header scrolling page.
//!
//! Three bands: the navigation header with one label per section (the active
//! one highlighted, the keyboard cursor underlined), the document body shown
//! at the current scroll offset, and a help bar that doubles as a status
//! line.

use crate::app_state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the page: navigation header, document body, help bar.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    draw_nav(f, app, chunks[0]);
    draw_body(f, app, chunks[1]);
    draw_help(f, app, chunks[2]);
}

fn draw_nav(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let mut spans = Vec::new();
    for (i, descriptor) in app.registry.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let mut style = if descriptor.id == app.active() {
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        if i == app.selected_nav {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::styled(descriptor.label.clone(), style));
    }

    let nav = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(app.portfolio.profile.name.clone()),
    );
    f.render_widget(nav, area);
}

fn draw_body(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let offset = u16::try_from(app.scroll_offset).unwrap_or(u16::MAX);
    let body = Paragraph::new(Text::from(app.document.clone())).scroll((offset, 0));
    f.render_widget(body, area);
}

fn draw_help(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let help_text = app.message.clone().unwrap_or_else(|| {
        "↑/↓ PgUp/PgDn: Scroll | ←/→ Enter: Go to section | 1-9: Jump | q: Quit".to_string()
    });
    let help = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

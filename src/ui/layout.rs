//! Layout components (page tabs, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Create the main layout: page tabs on top, content below
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the page tabs
pub fn draw_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = View::ALL
        .iter()
        .enumerate()
        .map(|(idx, view)| Line::from(format!("F{} {}", idx + 1, view.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.view.index())
        .block(
            Block::default()
                .title(format!(" {} ", app.config.restaurant_name()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Draw the status bar on the last line
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let spans = vec![
        Span::styled(
            format!(" {} ", app.view.title()),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ),
        Span::raw(" "),
        Span::styled(get_view_hints(&app.view), Style::default().fg(Color::Gray)),
        Span::raw(" | "),
        Span::styled(app.status_text(), Style::default().fg(Color::White)),
    ];

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> &'static str {
    match view {
        View::Home | View::Menu => "←/→:page  b:book  c:contact  q:quit",
        View::Book => "Tab:next  ←/→:choose  Enter:next/submit  ^S:submit  Esc:back",
        View::Contact => "Tab:next  Enter:next/submit  ^S:submit  Esc:back",
    }
}

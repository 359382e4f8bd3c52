//! Static informational pages

use crate::app::App;
use crate::state::{FAVOURITES, MENU};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_home(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    let hero = vec![
        Line::from(Span::styled(
            format!("Welcome to {}", app.config.restaurant_name()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Fine Dining · Expert Chefs · Perfect Ambiance"),
        Line::from(Span::styled(
            "Press b to book a table",
            Style::default().fg(Color::Cyan),
        )),
    ];
    frame.render_widget(
        Paragraph::new(hero).block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    let mut lines = Vec::new();
    for (dish, tagline) in FAVOURITES {
        lines.push(Line::from(Span::styled(
            *dish,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {tagline}"),
            Style::default().fg(Color::Gray),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(" All Time Favourites ")
                .borders(Borders::ALL),
        ),
        chunks[1],
    );
}

pub fn draw_menu(frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for item in MENU {
        lines.push(Line::from(vec![
            Span::styled(item.name, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(item.price, Style::default().fg(Color::Yellow)),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", item.category),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", item.description),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().title(" Our Menu ").borders(Borders::ALL)),
        area,
    );
}

//! Form pages: reservation and contact

mod field_renderer;

use crate::app::App;
use crate::error::SubmitFailure;
use crate::state::{Form, SubmissionStatus, RESERVATION_POLICY};
use crate::submission::FormSnapshot;
use field_renderer::draw_field;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the booking page: reservation form beside the policy
pub fn draw_book(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    draw_form(
        frame,
        chunks[0],
        " Make a Reservation ",
        app.reservation.snapshot(),
    );

    let policy: Vec<Line> = RESERVATION_POLICY
        .iter()
        .map(|rule| Line::from(format!("• {rule}")))
        .collect();
    frame.render_widget(
        Paragraph::new(policy).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Reservation Policy ")
                .borders(Borders::ALL),
        ),
        chunks[1],
    );
}

/// Draw the contact page: details beside the message form
pub fn draw_contact(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(Span::styled("Address", bold))];
    lines.extend(app.config.address_lines().into_iter().map(Line::from));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Contact", bold)));
    lines.push(Line::from(app.config.phone().to_string()));
    lines.push(Line::from(app.config.email().to_string()));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Hours", bold)));
    for entry in app.config.opening_hours() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", entry.days), Style::default().fg(Color::Gray)),
            Span::raw(entry.hours),
        ]));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().title(" Visit Us ").borders(Borders::ALL)),
        chunks[0],
    );

    draw_form(
        frame,
        chunks[1],
        " Send us a Message ",
        app.contact.snapshot(),
    );
}

/// Draw any form from its snapshot: fields, then status, then the submit button
fn draw_form<F: Form>(frame: &mut Frame, area: Rect, title: &str, snapshot: FormSnapshot<'_, F>) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    frame.render_widget(block, area);

    let fields = snapshot.fields.fields();
    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|f| {
            if f.is_multiline() {
                Constraint::Min(4)
            } else {
                Constraint::Length(3)
            }
        })
        .collect();
    constraints.push(Constraint::Length(2)); // Status message
    constraints.push(Constraint::Length(1)); // Submit button

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let active = snapshot.fields.active_field();
    for (idx, field) in fields.iter().enumerate() {
        let error = snapshot
            .errors
            .and_then(|errors| errors.for_field(field.name).next())
            .map(|kind| kind.message());
        draw_field(frame, chunks[idx], field, idx == active, error);
    }

    frame.render_widget(
        Paragraph::new(status_lines::<F>(&snapshot)).wrap(Wrap { trim: true }),
        chunks[fields.len()],
    );

    let (label, style) = if snapshot.status.is_submitting() {
        (F::SUBMITTING_LABEL, Style::default().fg(Color::DarkGray))
    } else {
        (
            F::SUBMIT_LABEL,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!("[ {label} ]"), style))).centered(),
        chunks[fields.len() + 1],
    );
}

/// Acknowledgement or error text for the current status
fn status_lines<'a, F: Form>(snapshot: &FormSnapshot<'a, F>) -> Vec<Line<'a>> {
    let green = Style::default().fg(Color::Green);
    let red = Style::default().fg(Color::Red);

    match snapshot.status {
        SubmissionStatus::Idle | SubmissionStatus::Submitting => Vec::new(),
        SubmissionStatus::Success => {
            let mut lines = vec![Line::from(Span::styled(F::SUCCESS_MESSAGE, green))];
            if let Some(receipt) = snapshot.receipt {
                lines.push(Line::from(Span::styled(
                    format!("Reference: {}", receipt.short_reference()),
                    green,
                )));
            }
            lines
        }
        SubmissionStatus::Error(SubmitFailure::Validation) => {
            let mut lines: Vec<Line> = snapshot
                .errors
                .map(|errors| {
                    errors
                        .form_level()
                        .map(|kind| Line::from(Span::styled(kind.message(), red)))
                        .collect()
                })
                .unwrap_or_default();
            if lines.is_empty() {
                lines.push(Line::from(Span::styled(
                    "Please correct the highlighted fields.",
                    red,
                )));
            }
            lines
        }
        SubmissionStatus::Error(SubmitFailure::Sink(_)) => {
            vec![Line::from(Span::styled(F::FAILURE_MESSAGE, red))]
        }
    }
}

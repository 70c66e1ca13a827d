use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::super::view::ModalRender;
use super::{fields::{field_lines, render_fields}, layout::modal_rect};

pub fn render_modal(frame: &mut Frame<'_>, modal: &ModalRender<'_>) {
    let screen = frame.area();
    let width = screen.width.saturating_sub(6).min(72).max(20);
    let body_lines = field_lines(modal.form, width.saturating_sub(4)) as u16;
    let height = body_lines
        .saturating_add(4)
        .min(screen.height.saturating_sub(2).max(5));
    let area = modal_rect(screen, width, height);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(modal.title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    render_fields(frame, chunks[0], modal.form, !modal.submitting);
    frame.render_widget(buttons_line(modal), chunks[1]);
}

fn buttons_line(modal: &ModalRender<'_>) -> Paragraph<'static> {
    let line = if modal.submitting {
        Line::from(Span::styled(
            " Submitting… ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(vec![
            Span::styled(
                format!(" {} (Ctrl+S) ", modal.submit_label),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                " Cancel (Esc) ",
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ),
        ])
    };
    Paragraph::new(line)
}

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::super::view::UiContext;

/// The backdrop behind the modal: the organization's authentication settings
/// pane.
pub fn render_page(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let org_line = match ctx.org {
        Some(org) => Line::from(vec![
            Span::raw("Organization: "),
            Span::styled(
                org.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(Span::styled(
            "No organization selected",
            Style::default().fg(Color::Red),
        )),
    };
    let state_line = if ctx.has_existing {
        Line::from(vec![
            Span::raw("LDAP: "),
            Span::styled("configured", Style::default().fg(Color::Green)),
            Span::styled(" (inactive until enabled)", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::raw("LDAP: "),
            Span::styled("not configured", Style::default().fg(Color::DarkGray)),
        ])
    };

    let body = Paragraph::new(vec![
        org_line,
        state_line,
        Line::from(" "),
        Line::from("Press Enter to open the LDAP configuration form."),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title("Organization Settings › Authentication")
            .borders(Borders::ALL),
    );
    frame.render_widget(body, area);
}

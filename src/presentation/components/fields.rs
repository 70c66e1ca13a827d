use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::form::{FieldState, FormState};

/// Renders the five form fields as a list inside the modal body and places
/// the terminal cursor at the end of the focused field's value.
pub fn render_fields(frame: &mut Frame<'_>, area: Rect, form: &FormState, enable_cursor: bool) {
    let content_width = area.width.saturating_sub(4);
    let mut items = Vec::with_capacity(form.fields().len());
    let mut cursor_hint: Option<CursorHint> = None;
    let mut line_offset = 0usize;

    for (idx, field) in form.fields().iter().enumerate() {
        let render = build_field_render(field, idx == form.focus_index(), content_width);
        if cursor_hint.is_none()
            && let Some(mut hint) = render.cursor_hint
        {
            hint.line_offset += line_offset;
            cursor_hint = Some(hint);
        }
        line_offset += render.lines.len();
        items.push(ListItem::new(render.lines));
    }

    let mut list_state = ListState::default();
    list_state.select(Some(form.focus_index()));

    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, area, &mut list_state);

    if enable_cursor
        && let Some(cursor) = cursor_hint
    {
        let line = cursor.line_offset.min(area.height.saturating_sub(1) as usize) as u16;
        let cursor_y = area.y.saturating_add(line);
        // Highlight symbol and the value panel prefix both take two columns.
        let cursor_x = area
            .x
            .saturating_add(4)
            .saturating_add(cursor.value_width);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

struct FieldRender {
    lines: Vec<Line<'static>>,
    cursor_hint: Option<CursorHint>,
}

struct CursorHint {
    line_offset: usize,
    value_width: u16,
}

fn build_field_render(field: &FieldState, is_selected: bool, max_width: u16) -> FieldRender {
    let mut lines = Vec::new();
    let mut label = field.id.label().to_string();
    if field.id.required() {
        label.push_str(" *");
    }

    let label_style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(Span::styled(label, label_style)));

    let (value_lines, cursor_hint) = value_panel_lines(field, is_selected, max_width);
    lines.extend(value_lines);

    if let Some(error) = error_lines(field, max_width) {
        lines.extend(error);
    }

    lines.push(Line::from(" "));

    FieldRender { lines, cursor_hint }
}

fn value_panel_lines(
    field: &FieldState,
    is_selected: bool,
    max_width: u16,
) -> (Vec<Line<'static>>, Option<CursorHint>) {
    let clamp_width = max_width.max(4) as usize;
    let placeholder = field.buffer.is_empty();
    let value_text = if placeholder {
        field.id.placeholder().to_string()
    } else {
        field.display_value()
    };

    // The certificate field holds real newlines; wrap each line on its own.
    let mut wrapped: Vec<String> = value_text
        .split('\n')
        .flat_map(|segment| wrap(segment, clamp_width))
        .map(|segment| segment.into_owned())
        .collect();
    if wrapped.is_empty() {
        wrapped.push(String::new());
    }

    let value_style = if placeholder {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };

    let mut lines = Vec::new();
    let mut cursor_hint = None;
    if is_selected {
        let last_width = if placeholder {
            0
        } else {
            wrapped
                .last()
                .map(|line| UnicodeWidthStr::width(line.as_str()))
                .unwrap_or(0)
        };
        for segment in wrapped {
            lines.push(Line::from(vec![
                Span::styled("│ ", Style::default().fg(Color::Yellow)),
                Span::styled(segment, value_style.add_modifier(Modifier::BOLD)),
            ]));
        }
        cursor_hint = Some(CursorHint {
            // Last value line, plus one for the label line above the panel.
            line_offset: lines.len(),
            value_width: last_width as u16,
        });
    } else {
        for segment in wrapped {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(segment, value_style),
            ]));
        }
    }

    (lines, cursor_hint)
}

fn error_lines(field: &FieldState, max_width: u16) -> Option<Vec<Line<'static>>> {
    field.error.as_ref().map(|message| {
        wrap(message, max_width.max(4) as usize)
            .into_iter()
            .map(|line| {
                Line::from(Span::styled(
                    format!("  {}", line.into_owned()),
                    Style::default().fg(Color::Red),
                ))
            })
            .collect()
    })
}

/// Total lines the field list occupies, used to size the modal.
pub fn field_lines(form: &FormState, max_width: u16) -> usize {
    form.fields()
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            build_field_render(field, idx == form.focus_index(), max_width)
                .lines
                .len()
        })
        .sum()
}

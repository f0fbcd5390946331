//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// How a field should be drawn
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    /// Inline validation message, shown on the bottom border
    pub error: Option<&'a str>,
    pub is_active: bool,
    pub is_multiline: bool,
}

/// Draw a labelled form field with its inline error
pub fn draw_field(frame: &mut Frame, area: Rect, field: FieldView) {
    let border_color = match (field.is_active, field.error.is_some()) {
        (true, _) => Color::Cyan,
        (false, true) => Color::Red,
        (false, false) => Color::DarkGray,
    };
    let text_style = if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let display_value = if field.value.is_empty() && !field.is_active {
        "(empty)"
    } else {
        field.value
    };
    let cursor = if field.is_active { "▌" } else { "" };
    let cursor_span = Span::styled(cursor, Style::default().fg(Color::Cyan));

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::styled(l.to_string(), text_style))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, text_style),
            cursor_span,
        ]))
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if let Some(error) = field.error {
        block = block.title_bottom(Line::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        ));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw a help line under the form
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, area);
}

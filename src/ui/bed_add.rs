//! Landing view after a facility is created

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the bed entry placeholder for the navigated location
pub fn draw(frame: &mut Frame, area: Rect, location: &str) {
    let lines = vec![
        Line::from(vec![
            Span::raw("Location: "),
            Span::styled(location, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Bed capacity entry continues in the main application.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(" Add Beds ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

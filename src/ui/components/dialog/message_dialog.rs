//! Notification dialog component

use super::base::{render_dialog, DialogConfig};
use crate::state::{AppMessage, MessageKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

fn title_and_color(kind: MessageKind) -> (&'static str, Color) {
    match kind {
        MessageKind::Success => ("Success", Color::Green),
        MessageKind::Error => ("Error", Color::Red),
        MessageKind::None => ("Notice", Color::White),
    }
}

/// Render the global notification centered on the screen
pub fn render_message_dialog(frame: &mut Frame, message: &AppMessage) {
    let (title, accent) = title_and_color(message.kind);
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title,
            accent,
            message: &message.message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_follows_message_kind() {
        assert_eq!(title_and_color(MessageKind::Success), ("Success", Color::Green));
        assert_eq!(title_and_color(MessageKind::Error), ("Error", Color::Red));
    }
}

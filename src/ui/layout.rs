//! Layout components (content area, status bar)

use crate::api::FacilityServiceTrait;
use crate::app::App;
use crate::platform::SAVE_SHORTCUT;
use crate::state::{SubmitPhase, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into main content and a one-line status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Key hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::FacilityCreate => {
            format!("Tab/↑↓: move | ←→: district | Enter: next/save | {SAVE_SHORTCUT}: save")
        }
        View::BedAdd { .. } => "Esc: new facility | q: quit".to_string(),
    }
}

/// Short description of the submit lifecycle
fn phase_label(phase: &SubmitPhase) -> Option<(String, Color)> {
    match phase {
        SubmitPhase::Idle | SubmitPhase::Validating => None,
        SubmitPhase::Submitting => Some(("saving…".to_string(), Color::Yellow)),
        SubmitPhase::Succeeded { facility_id } => {
            Some((format!("created facility {facility_id}"), Color::Green))
        }
        SubmitPhase::Failed { .. } => Some(("last save failed".to_string(), Color::Red)),
    }
}

/// Draw the status bar
pub fn draw_status_bar<S: FacilityServiceTrait>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", get_view_hints(&app.view)),
        Style::default().fg(Color::Gray),
    )];

    if let Some((label, color)) = phase_label(app.session.phase()) {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(label, Style::default().fg(color)));
    }

    spans.push(Span::styled(" | ^C^C: quit ", Style::default().fg(Color::Gray)));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);
}

//! Facility create form rendering

use super::field_renderer::{draw_field, draw_help_text, FieldView};
use crate::platform::SAVE_SHORTCUT;
use crate::state::{districts, FacilityField, FieldKind, FormFocus, SessionState};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Widest the card is allowed to grow
const MAX_FORM_WIDTH: u16 = 72;

/// Rows used by a field of the given kind
fn field_height(kind: FieldKind) -> u16 {
    match kind {
        FieldKind::Multiline => 5,
        FieldKind::Text | FieldKind::DistrictSelect => 3,
    }
}

/// Text shown for the district select
fn district_display(id: &str, is_active: bool) -> String {
    let name = if id.is_empty() {
        "None"
    } else {
        districts::name_for(id).unwrap_or(id)
    };
    if is_active {
        format!("◀ {name} ▶")
    } else {
        name.to_string()
    }
}

/// Draw the facility create card
pub fn draw_facility_create(frame: &mut Frame, area: Rect, state: &SessionState) {
    let width = area.width.min(MAX_FORM_WIDTH);
    let card = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let block = Block::default()
        .title(" Create Facility ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut constraints: Vec<Constraint> = FacilityField::ALL
        .iter()
        .map(|f| Constraint::Length(field_height(f.kind())))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Save
    constraints.push(Constraint::Length(1)); // Help
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    let focus = state.form.focus();
    let values = state.form.values();
    let errors = state.form.errors();

    for (i, field) in FacilityField::ALL.into_iter().enumerate() {
        let is_active = focus == FormFocus::Field(field);
        let district;
        let value = match field.kind() {
            FieldKind::DistrictSelect => {
                district = district_display(values.get(field), is_active);
                district.as_str()
            }
            FieldKind::Text | FieldKind::Multiline => values.get(field),
        };

        draw_field(
            frame,
            chunks[i],
            FieldView {
                label: field.label(),
                value,
                error: errors.message(field),
                is_active,
                is_multiline: field.kind() == FieldKind::Multiline,
            },
        );
    }

    let save_index = FacilityField::ALL.len();
    let save_area = Rect {
        width: chunks[save_index].width.min(12),
        x: chunks[save_index].x + chunks[save_index].width.saturating_sub(12),
        ..chunks[save_index]
    };
    render_button(
        frame,
        save_area,
        "Save",
        focus == FormFocus::SaveButton,
        Some(Color::Green),
    );

    draw_help_text(
        frame,
        chunks[save_index + 1],
        &format!("Fields marked * are required. {SAVE_SHORTCUT} saves from anywhere."),
    );
}

//! UI module for rendering the TUI

mod bed_add;
mod components;
mod forms;
mod layout;
mod loading;

use crate::app::App;
use crate::api::FacilityServiceTrait;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw<S: FacilityServiceTrait>(frame: &mut Frame, app: &App<S>) {
    let main_area = layout::create_layout(frame.area());

    // Draw main content based on current view
    match &app.view {
        View::FacilityCreate if app.is_busy() => loading::draw(frame, main_area),
        View::FacilityCreate => forms::draw_facility_create(frame, main_area, app.session.state()),
        View::BedAdd { location } => bed_add::draw(frame, main_area, location),
    }

    // Notification overlay
    if app.session.message.show {
        components::render_message_dialog(frame, &app.session.message);
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}

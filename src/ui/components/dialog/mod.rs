//! Dialog components

mod base;
mod message_dialog;

pub use message_dialog::render_message_dialog;

//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `facility_form`: The facility create form

mod facility_form;
mod field_renderer;

pub use facility_form::draw_facility_create;

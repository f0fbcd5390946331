//! Form domain layer
//!
//! Type-safe values, errors and focus for the facility form.

mod field;
mod form_state;

pub use field::{FacilityField, FieldKind};
pub use form_state::{FormErrors, FormFocus, FormState, FormValues};

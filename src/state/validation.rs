//! Whole-form validation

use super::forms::{FacilityField, FormErrors, FormValues};
use super::validators::{is_valid_coordinate, is_valid_latitude, is_valid_phone};

pub const REQUIRED_MESSAGE: &str = "Field is required";
pub const PHONE_MESSAGE: &str =
    "Please Enter 10/11 digit mobile number or landline as 0<std code><phone number>";
pub const COORDINATE_MESSAGE: &str = "Please enter valid coordinates";

/// Result of one validation pass over the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationVerdict {
    pub valid: bool,
    pub errors: FormErrors,
}

/// Check a single field value, returning its error message if any
fn field_error(field: FacilityField, value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some(REQUIRED_MESSAGE);
    }
    match field {
        FacilityField::PhoneNumber if !is_valid_phone(value) => Some(PHONE_MESSAGE),
        FacilityField::Latitude if !is_valid_latitude(value) => Some(COORDINATE_MESSAGE),
        FacilityField::Longitude if !is_valid_coordinate(value) => Some(COORDINATE_MESSAGE),
        _ => None,
    }
}

/// Validate every field and produce a fresh error map.
///
/// The district holds an identifier, so it only has to be present.
pub fn validate(values: &FormValues) -> ValidationVerdict {
    let errors = values
        .iter()
        .fold(FormErrors::default(), |errors, (field, value)| {
            match field_error(field, value) {
                Some(message) => errors.with(field, message),
                None => errors,
            }
        });

    ValidationVerdict {
        valid: !errors.has_errors(),
        errors,
    }
}

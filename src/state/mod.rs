//! Application state module

mod app_state;
pub mod districts;
mod forms;
mod submission;
mod validation;
mod validators;

pub use app_state::*;
pub use forms::*;
pub use submission::*;
#[cfg(test)]
pub use validation::REQUIRED_MESSAGE;

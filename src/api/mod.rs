//! Facility service client module for HTTP communication

mod client;
mod error;
mod traits;

pub use client::FacilityClient;
pub use error::ApiError;
pub use traits::FacilityServiceTrait;

#[cfg(test)]
pub use traits::MockFacilityServiceTrait;

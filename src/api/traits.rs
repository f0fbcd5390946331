//! Trait abstraction for the facility service to enable mocking in tests

use super::ApiError;
use crate::state::{CreateFacilityResponse, SubmissionRequest};
use async_trait::async_trait;

/// Operations the facility screen needs from the backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FacilityServiceTrait: Send + Sync {
    /// Create a facility and return the service's response body
    async fn create_facility(
        &self,
        request: &SubmissionRequest,
    ) -> Result<CreateFacilityResponse, ApiError>;
}

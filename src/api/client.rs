//! HTTP client for communicating with the facility service
//!
//! Facilities are created with a JSON POST; the service answers with the
//! created record, of which only the id is used here.

use super::{ApiError, FacilityServiceTrait};
use crate::config::TuiConfig;
use crate::state::{CreateFacilityResponse, SubmissionRequest};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Path of the facility collection, relative to the API base URL
const FACILITY_PATH: &str = "/api/v1/facility/";

/// Client for the facility service
#[derive(Debug, Clone)]
pub struct FacilityClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl FacilityClient {
    /// Create a client from the user configuration
    pub fn new(config: &TuiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url().trim_end_matches('/').to_string(),
            token: config.api_token(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn facility_url(&self) -> String {
        format!("{}{}", self.base_url, FACILITY_PATH)
    }
}

#[async_trait]
impl FacilityServiceTrait for FacilityClient {
    async fn create_facility(
        &self,
        request: &SubmissionRequest,
    ) -> Result<CreateFacilityResponse, ApiError> {
        let url = self.facility_url();
        tracing::debug!("POST {url}");

        let mut builder = self.http.post(&url).json(request);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FacilityField, FormValues};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> TuiConfig {
        TuiConfig {
            api_base_url: Some(format!("{}/", server.uri())),
            ..Default::default()
        }
    }

    fn sample_request() -> SubmissionRequest {
        let values: FormValues = [
            (FacilityField::Name, "PHC Aluva"),
            (FacilityField::District, "7"),
            (FacilityField::Address, "Aluva"),
            (FacilityField::PhoneNumber, "9876543210"),
            (FacilityField::Latitude, "10.1004"),
            (FacilityField::Longitude, "76.3570"),
        ]
        .into_iter()
        .collect();
        SubmissionRequest::from_values(&values)
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = TuiConfig {
            api_base_url: Some("http://example.test/".to_string()),
            ..Default::default()
        };
        let client = FacilityClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://example.test");
        assert_eq!(client.facility_url(), "http://example.test/api/v1/facility/");
    }

    #[tokio::test]
    async fn test_create_facility_posts_payload_and_reads_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(FACILITY_PATH))
            .and(body_partial_json(serde_json::json!({
                "facility_type": 1,
                "location": { "latitude": "10.1004", "longitude": "76.3570" }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 42,
                "name": "PHC Aluva"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = FacilityClient::new(&config_for(&server)).unwrap();
        let response = client.create_facility(&sample_request()).await.unwrap();
        assert_eq!(response.facility_id(), Some("42".to_string()));
    }

    #[tokio::test]
    async fn test_create_facility_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "id": 7 })))
            .expect(1)
            .mount(&server)
            .await;

        let config = TuiConfig {
            api_token: Some("secret".to_string()),
            ..config_for(&server)
        };
        let client = FacilityClient::new(&config).unwrap();
        let response = client.create_facility(&sample_request()).await.unwrap();
        assert_eq!(response.facility_id(), Some("7".to_string()));
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad district"))
            .mount(&server)
            .await;

        let client = FacilityClient::new(&config_for(&server)).unwrap();
        let err = client.create_facility(&sample_request()).await.unwrap_err();
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "bad district");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let client = FacilityClient::new(&config_for(&server)).unwrap();
        let err = client.create_facility(&sample_request()).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}

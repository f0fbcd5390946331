//! Configuration handling for the TUI

use crate::state::DEFAULT_FAILURE_MESSAGE;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default facility service address
const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Facility service base URL
    pub api_base_url: Option<String>,
    /// Bearer token sent with every request
    pub api_token: Option<String>,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: Option<u64>,
    /// Notification text shown when a facility could not be created
    pub failure_message: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "facility", "facility-create-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                serde_json::from_str(&content)?
            }
            _ => Self::default(),
        };

        Ok(config.with_overrides(
            std::env::var("FACILITY_API_URL").ok(),
            std::env::var("FACILITY_API_TOKEN").ok(),
        ))
    }

    /// Replace the URL and token with explicitly provided values
    fn with_overrides(mut self, api_base_url: Option<String>, api_token: Option<String>) -> Self {
        if let Some(url) = api_base_url.filter(|u| !u.is_empty()) {
            self.api_base_url = Some(url);
        }
        if let Some(token) = api_token.filter(|t| !t.is_empty()) {
            self.api_token = Some(token);
        }
        self
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    pub fn api_token(&self) -> Option<String> {
        self.api_token.clone().filter(|t| !t.is_empty())
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    pub fn failure_message(&self) -> &str {
        self.failure_message
            .as_deref()
            .unwrap_or(DEFAULT_FAILURE_MESSAGE)
    }
}

//! Environment-based configuration.
//!
//! Values are read from the process environment after `dotenvy` has loaded any
//! `.env` file. [`Config::from_lookup`] takes the lookup as a closure so tests do not
//! have to touch the real environment.

use crate::framework::HttpTransportConfig;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_SAP_CLIENT: &str = "100";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_INPUT_PATH: &str = "./Inputs/SDC_Production_Order_Confirmation_sample.json";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Service root, e.g. `https://host/sap/opu/odata/sap`.
    pub base_url: String,
    pub sap_client: String,
    pub user: Option<String>,
    pub password: Option<String>,
    /// Deadline for each outbound call.
    pub request_timeout: Duration,
    pub input_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup("SAP_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("SAP_BASE_URL".to_string()))?;

        let request_timeout = match lookup("SAP_REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                    ConfigError::InvalidEnvValue {
                        var: "SAP_REQUEST_TIMEOUT_SECS".to_string(),
                        reason: e.to_string(),
                    }
                })?;
                if secs == 0 {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "SAP_REQUEST_TIMEOUT_SECS".to_string(),
                        reason: "must be greater than zero".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            base_url,
            sap_client: lookup("SAP_CLIENT").unwrap_or_else(|| DEFAULT_SAP_CLIENT.to_string()),
            user: lookup("SAP_USER"),
            password: lookup("SAP_PASSWORD"),
            request_timeout,
            input_path: lookup("INPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH)),
        })
    }

    pub fn http_transport(&self) -> HttpTransportConfig {
        HttpTransportConfig {
            sap_client: self.sap_client.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
        }
    }
}

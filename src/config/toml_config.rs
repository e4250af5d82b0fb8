use crate::utils::error::{FormError, Result};
use crate::utils::validation::{
    validate_endpoint_path, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Client settings: where the backend lives and which paths it serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub endpoints: EndpointsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// Unset means requests may wait indefinitely.
    pub timeout_seconds: Option<u64>,
}

/// Endpoint paths, each joined onto `api.base_url`. Missing keys keep the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    pub contact: String,
    pub generate_layout: String,
    pub recommendations: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            contact: "/api/contact".to_string(),
            generate_layout: "/api/generate-layout".to_string(),
            recommendations: "/api/get-recommendations".to_string(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    /// Default endpoints and no timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
                timeout_seconds: None,
            },
            endpoints: EndpointsConfig::default(),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FormError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FormError::Config {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Per-request timeout for the HTTP client.
    pub fn timeout(&self) -> Option<Duration> {
        self.api.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        // base URL must be http(s)
        validate_url("api.base_url", &self.api.base_url)?;

        if let Some(timeout) = self.api.timeout_seconds {
            validate_positive_number("api.timeout_seconds", timeout, 1)?;
        }

        // paths are appended to the base URL verbatim
        validate_endpoint_path("endpoints.contact", &self.endpoints.contact)?;
        validate_endpoint_path("endpoints.generate_layout", &self.endpoints.generate_layout)?;
        validate_endpoint_path("endpoints.recommendations", &self.endpoints.recommendations)?;

        Ok(())
    }
}

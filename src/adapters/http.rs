use crate::config::ClientConfig;
use crate::domain::ports::{ApiTransport, HttpMethod};
use crate::utils::error::{FormError, Result};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// [`ApiTransport`] over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| FormError::InvalidConfigValue {
            field: "endpoint".to_string(),
            value: raw,
            reason: format!("Invalid URL format: {}", e),
        })
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn call(
        &self,
        method: HttpMethod,
        path: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value> {
        let url = self.endpoint(path)?;
        tracing::debug!("Making {:?} request to: {}", method, url);

        let request = match method {
            HttpMethod::Post => self.client.post(url).json(&body),
        };
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let text = response.text().await?;

        if !status.is_success() {
            // Backend errors come back as {"error": "..."}.
            let message = serde_json::from_str::<serde_json::Value>(&text)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            return Err(FormError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

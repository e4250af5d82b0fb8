use crate::config::EndpointsConfig;
use crate::domain::model::{
    ContactRequest, ContactResponse, LayoutRequest, LayoutResponse, RecommendationRequest,
    RecommendationResponse,
};
use crate::domain::ports::{ApiTransport, HttpMethod};
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Typed calls to the three backend endpoints.
#[derive(Debug, Clone)]
pub struct FormsApi<T: ApiTransport> {
    transport: T,
    endpoints: EndpointsConfig,
}

impl<T: ApiTransport> FormsApi<T> {
    pub fn new(transport: T, endpoints: EndpointsConfig) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    pub async fn submit_contact(&self, request: &ContactRequest) -> Result<ContactResponse> {
        self.post(&self.endpoints.contact, request).await
    }

    pub async fn generate_layout(&self, request: &LayoutRequest) -> Result<LayoutResponse> {
        self.post(&self.endpoints.generate_layout, request).await
    }

    pub async fn get_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse> {
        self.post(&self.endpoints.recommendations, request).await
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        let value = self.transport.call(HttpMethod::Post, path, body).await?;
        Ok(serde_json::from_value(value)?)
    }
}

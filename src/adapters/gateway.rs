use crate::config::GatewayConfig;
use crate::domain::form::{Inquiry, InquiryRecord};
use crate::domain::ports::{InquiryGateway, InquiryLog};
use crate::utils::error::{AppError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;

const INQUIRIES_COLLECTION: &str = "inquiries";

/// 以 HTTP 寫入雲端文件庫的 `inquiries` 集合
#[derive(Debug, Clone)]
pub struct HttpInquiryGateway {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl HttpInquiryGateway {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        validate_url("gateway.endpoint", &endpoint)?;
        Ok(Self {
            client: Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: None,
            timeout: None,
        })
    }

    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        let mut gateway = Self::new(config.endpoint.clone())?;
        gateway.api_key = config.api_key.clone().filter(|key| !key.is_empty());
        gateway.timeout = config.timeout_seconds.map(Duration::from_secs);
        Ok(gateway)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.endpoint, INQUIRIES_COLLECTION)
    }

    fn prepare(&self, mut request: RequestBuilder) -> RequestBuilder {
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        request
    }

    async fn ensure_success(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = if body.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        } else {
            body
        };
        Err(AppError::GatewayRejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl InquiryGateway for HttpInquiryGateway {
    async fn submit(&self, inquiry: &Inquiry) -> Result<()> {
        let url = self.collection_url();
        tracing::debug!("Submitting inquiry to: {}", url);

        let request = self.prepare(self.client.post(&url).json(inquiry));
        let response = request.send().await?;
        tracing::debug!("Gateway response status: {}", response.status());

        Self::ensure_success(response).await?;
        tracing::info!("✅ Inquiry recorded ({})", inquiry.inquiry_type);
        Ok(())
    }
}

#[async_trait]
impl InquiryLog for HttpInquiryGateway {
    async fn list_inquiries(&self) -> Result<Vec<InquiryRecord>> {
        let url = self.collection_url();
        tracing::debug!("Fetching inquiries from: {}", url);

        let response = self.prepare(self.client.get(&url)).send().await?;
        let response = Self::ensure_success(response).await?;
        let mut records: Vec<InquiryRecord> = response.json().await?;

        // 新的在前；沒有時間戳的排最後
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        tracing::debug!("Fetched {} inquiries", records.len());
        Ok(records)
    }
}

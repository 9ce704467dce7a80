//! HTTP adapter for the decode and recall services.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use vinlookup_domain::{DecodeReply, RecallList, Vin};

use crate::infrastructure::config::LookupConfig;
use crate::infrastructure::ports::{DecodePort, RecallPort, ServiceError};

/// JSON-over-HTTP client for both lookup services
#[derive(Clone)]
pub struct HttpLookupClient {
    client: Client,
    decode_url: Url,
    recall_url: Url,
}

impl HttpLookupClient {
    /// No request timeout is set; a hung service keeps the lookup pending.
    pub fn new(config: &LookupConfig) -> Self {
        Self {
            client: Client::new(),
            decode_url: config.decode_url.clone(),
            recall_url: config.recall_url.clone(),
        }
    }

    async fn post_vin(&self, url: &Url, vin: &Vin) -> Result<Response, ServiceError> {
        tracing::debug!(url = %url, vin = %vin, "POST");

        self.client
            .post(url.clone())
            .json(&VinRequest { vin: vin.as_str() })
            .send()
            .await
            .map_err(|e| ServiceError::RequestFailed(e.to_string()))
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ServiceError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl DecodePort for HttpLookupClient {
    /// A non-success status is only logged. Decode failures are reported
    /// in-band, so any JSON object body goes through the `ErrorCode` rules.
    async fn decode(&self, vin: &Vin) -> Result<DecodeReply, ServiceError> {
        let response = self.post_vin(&self.decode_url, vin).await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                vin = %vin,
                "Decode service returned error status"
            );
        }

        read_json(response).await
    }
}

#[async_trait]
impl RecallPort for HttpLookupClient {
    async fn recalls(&self, vin: &Vin) -> Result<RecallList, ServiceError> {
        let response = self.post_vin(&self.recall_url, vin).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| ServiceError::RequestFailed(e.to_string()))?;
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        read_json(response).await
    }
}

#[derive(Debug, Serialize)]
struct VinRequest<'a> {
    vin: &'a str,
}

//! Browser transport for the lead insert.

use async_trait::async_trait;
use gloo_net::http::Request;
use leadform::remote::check_status;
use leadform::{BackendConfig, InsertRequest, LeadRecord, LeadSink, RemoteWriteError};

/// Sends [`InsertRequest`]s with `fetch`.
#[derive(Clone, Debug)]
pub struct RestLeadSink {
    backend: BackendConfig,
}

impl RestLeadSink {
    pub fn new(backend: BackendConfig) -> Self {
        Self { backend }
    }
}

#[async_trait(?Send)]
impl LeadSink for RestLeadSink {
    async fn insert(&self, record: &LeadRecord) -> Result<(), RemoteWriteError> {
        let request = InsertRequest::build(&self.backend, record)?;

        let builder = request
            .headers
            .iter()
            .fold(Request::post(&request.url), |builder, (name, value)| {
                builder.header(name, value)
            });

        let response = builder
            .body(request.body)
            .map_err(|e| RemoteWriteError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| RemoteWriteError::Transport(e.to_string()))?;

        let status = response.status();
        let body = if response.ok() {
            String::new()
        } else {
            response.text().await.unwrap_or_default()
        };
        check_status(status, body)
    }
}

//! The single remote write: insert one lead row.
//!
//! [`InsertRequest`] describes the HTTP call in the hosted backend's REST
//! dialect (PostgREST). It is plain data so the exact wire shape is tested on
//! the native target; the browser transport in `landing` only sends it.

use async_trait::async_trait;

use crate::config::BackendConfig;
use crate::error::RemoteWriteError;
use crate::record::LeadRecord;

/// Destination of accepted leads.
///
/// Futures are `?Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait LeadSink {
    /// Insert exactly one row. No retries.
    async fn insert(&self, record: &LeadRecord) -> Result<(), RemoteWriteError>;
}

#[async_trait(?Send)]
impl<S: LeadSink + ?Sized> LeadSink for &S {
    async fn insert(&self, record: &LeadRecord) -> Result<(), RemoteWriteError> {
        (**self).insert(record).await
    }
}

/// A fully described insert call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertRequest {
    /// `POST` target
    pub url: String,
    /// Header name/value pairs, in send order
    pub headers: Vec<(&'static str, String)>,
    /// JSON object body
    pub body: String,
}

impl InsertRequest {
    /// Describe the insert of `record` into the configured table.
    pub fn build(backend: &BackendConfig, record: &LeadRecord) -> Result<Self, RemoteWriteError> {
        if !backend.is_configured() {
            return Err(RemoteWriteError::NotConfigured);
        }

        let url = format!(
            "{}/rest/v1/{}",
            backend.url.trim().trim_end_matches('/'),
            backend.table
        );
        let headers = vec![
            ("apikey", backend.anon_key.clone()),
            ("Authorization", format!("Bearer {}", backend.anon_key)),
            ("Content-Type", "application/json".to_string()),
            ("Prefer", "return=minimal".to_string()),
        ];
        let body = record.to_json()?;

        Ok(Self { url, headers, body })
    }

    /// Header value by (case-insensitive) name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Map an HTTP status to the insert result. PostgREST answers `201 Created`
/// for a minimal-return insert; any 2xx counts.
pub fn check_status(status: u16, body: impl Into<String>) -> Result<(), RemoteWriteError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(RemoteWriteError::Rejected {
            status,
            body: body.into(),
        })
    }
}

//! gastos-client: thin HTTP client that forwards parsed expense rows to a
//! remote ingestion endpoint.
//!
//! One request, one response. No retry, no chunking, no timeout; callers
//! decide what to do with a failure.

use gastos_core::Row;
use log::{debug, info};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Path appended to the configured base URL.
const INGEST_PATH: &str = "/ingest";

/// Failure modes of a single ingestion exchange. A rejected request (any
/// non-2xx status) is reported separately from a transport-level failure
/// so callers can name the status code when one exists.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("ingest endpoint returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The exchange never completed cleanly: connection failure, or a
    /// success status whose body is not valid JSON.
    #[error("ingest transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Success response body. The server may include a human-readable message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IngestReceipt {
    pub message: Option<String>,
}

#[derive(Serialize)]
struct IngestRequest<'a> {
    #[serde(rename = "tenantId")]
    tenant_id: &'a str,
    rows: &'a [Row],
}

#[derive(Debug, Clone)]
pub struct IngestClient {
    http: reqwest::Client,
    base_url: String,
}

impl IngestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        IngestClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Submit the full row sequence for `tenant_id` in a single exchange.
    pub async fn upload(&self, tenant_id: &str, rows: &[Row]) -> Result<IngestReceipt, IngestError> {
        let url = format!("{}{INGEST_PATH}", self.base_url.trim_end_matches('/'));
        info!("uploading {} rows to {url}", rows.len());

        let resp = self
            .http
            .post(&url)
            .json(&IngestRequest { tenant_id, rows })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(IngestError::Status { status, body });
        }

        let receipt: IngestReceipt = resp.json().await?;
        debug!("ingest accepted: {:?}", receipt.message);
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_the_wire_contract() {
        let rows = vec![
            Row {
                date: "2025-01-01".to_string(),
                category: "Marketing".to_string(),
                amount: 1200.0,
            },
            Row {
                date: "2025-01-03".to_string(),
                category: "Operación".to_string(),
                amount: 500.0,
            },
        ];

        let body = serde_json::to_value(IngestRequest {
            tenant_id: "acme",
            rows: &rows,
        })
        .unwrap();

        assert_eq!(body["tenantId"], "acme");
        assert_eq!(body["rows"].as_array().unwrap().len(), 2);
        assert_eq!(body["rows"][0]["date"], "2025-01-01");
        assert_eq!(body["rows"][0]["category"], "Marketing");
        assert_eq!(body["rows"][0]["amount"], 1200.0);
    }

    #[test]
    fn status_error_names_the_code() {
        let err = IngestError::Status {
            status: StatusCode::BAD_GATEWAY,
            body: "upstream down".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("upstream down"));
    }
}

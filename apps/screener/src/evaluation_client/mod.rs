/// Evaluation client: the only code that talks to the screening service.
///
/// `EvaluationTransport` is the seam the submission controller depends on;
/// `HttpEvaluationClient` is the reqwest implementation used in production.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::models::{EvaluationResult, FileSelection};

const SCREENING_ENDPOINT: &str = "/screening/";
const HEALTH_ENDPOINT: &str = "/health";

/// Multipart part names expected by the service.
pub const RESUME_PART: &str = "resume";
pub const JD_PART: &str = "jd";

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Sends one resume/JD pair for evaluation.
///
/// Implementations must resolve exactly once per call.
#[async_trait]
pub trait EvaluationTransport: Send + Sync {
    async fn submit_evaluation(
        &self,
        resume: &FileSelection,
        jd: &FileSelection,
    ) -> Result<EvaluationResult, TransportError>;
}

#[derive(Debug, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

#[derive(Clone)]
pub struct HttpEvaluationClient {
    client: Client,
    base_url: String,
}

impl HttpEvaluationClient {
    /// `timeout` of `None` keeps reqwest's default (no overall timeout).
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// GET /health on the service.
    pub async fn health(&self) -> Result<HealthStatus, TransportError> {
        let url = self.url(HEALTH_ENDPOINT);
        debug!("Probing {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn document_part(selection: &FileSelection) -> Result<Part, TransportError> {
    Ok(Part::stream(selection.bytes.clone())
        .file_name(selection.file_name.clone())
        .mime_str(selection.content_type)?)
}

#[async_trait]
impl EvaluationTransport for HttpEvaluationClient {
    async fn submit_evaluation(
        &self,
        resume: &FileSelection,
        jd: &FileSelection,
    ) -> Result<EvaluationResult, TransportError> {
        let url = self.url(SCREENING_ENDPOINT);

        let form = Form::new()
            .part(RESUME_PART, document_part(resume)?)
            .part(JD_PART, document_part(jd)?);

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Screening service returned {status}: {body}");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Screening response: {} bytes", body.len());
        Ok(serde_json::from_str(&body)?)
    }
}

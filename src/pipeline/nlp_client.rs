//! HTTP client for the local NLP sidecar service.
//!
//! The sidecar wraps the Portuguese language model and the summarization
//! model behind two JSON endpoints (`/annotate`, `/summarize`). Models are
//! expensive to load, so the sidecar holds them for its process lifetime and
//! this client is constructed once at startup and reused for every request.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::pipeline::provider::{LanguageAnalyzer, SpanAnnotation, SpanLabel, SummaryProvider};

/// Blocking HTTP client for the NLP sidecar.
pub struct NlpServiceClient {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl NlpServiceClient {
    /// Create a client pointing at the sidecar.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// Default sidecar instance at localhost:8600 with a 2-minute timeout.
    pub fn default_local() -> Self {
        Self::new("http://localhost:8600", 120)
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe the sidecar's health endpoint. False on any failure; used
    /// only for a startup log line, never to gate a request.
    pub fn is_available(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send() {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ProviderError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self.client.post(&url).json(body).send().map_err(|e| {
            if e.is_connect() {
                ProviderError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                ProviderError::Timeout(self.timeout_secs)
            } else {
                ProviderError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ProviderError::Service {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .map_err(|e| ProviderError::ResponseParsing(e.to_string()))
    }

    fn annotate_document(&self, text: &str) -> Result<AnnotateResponse, ProviderError> {
        self.post_json("/annotate", &AnnotateRequest { text })
    }
}

/// Request body for POST /annotate
#[derive(Serialize)]
struct AnnotateRequest<'a> {
    text: &'a str,
}

/// Response body from POST /annotate
#[derive(Deserialize)]
struct AnnotateResponse {
    entities: Vec<RawSpan>,
    sentences: Vec<String>,
}

#[derive(Deserialize)]
struct RawSpan {
    text: String,
    label: String,
}

/// Request body for POST /summarize
#[derive(Serialize)]
struct SummarizeRequest<'a> {
    text: &'a str,
    min_length: u32,
    max_length: u32,
}

/// Response body from POST /summarize
#[derive(Deserialize)]
struct SummarizeResponse {
    summary: String,
}

impl LanguageAnalyzer for NlpServiceClient {
    fn annotate(&self, text: &str) -> Result<Vec<SpanAnnotation>, ProviderError> {
        let document = self.annotate_document(text)?;
        Ok(document
            .entities
            .into_iter()
            .map(|span| SpanAnnotation {
                label: SpanLabel::from_tag(&span.label),
                text: span.text,
            })
            .collect())
    }

    fn sentences(&self, text: &str) -> Result<Vec<String>, ProviderError> {
        let document = self.annotate_document(text)?;
        Ok(document.sentences)
    }
}

impl SummaryProvider for NlpServiceClient {
    fn summarize(
        &self,
        text: &str,
        min_len: u32,
        max_len: u32,
    ) -> Result<String, ProviderError> {
        let response: SummarizeResponse = self.post_json(
            "/summarize",
            &SummarizeRequest {
                text,
                min_length: min_len,
                max_length: max_len,
            },
        )?;
        Ok(response.summary)
    }
}

//! Error types for the triage core.
//!
//! Extraction and change detection are total over their input domain:
//! malformed or non-clinical text yields sparse results, never an error.
//! The only failure sources are the external NLP sidecar (ProviderError)
//! and a blank current record (AnalysisError::EmptyRecord), which are kept
//! distinct so the caller can render them differently.

use thiserror::Error;

/// Infrastructure failures of the external NLP service.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("NLP service is not reachable at {0}")]
    Connection(String),

    #[error("NLP request timed out after {0}s")]
    Timeout(u64),

    #[error("NLP service returned error (status {status}): {body}")]
    Service { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Malformed NLP response: {0}")]
    ResponseParsing(String),
}

/// Failures of a single analysis run.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The current record was empty or whitespace-only. The one user-facing
    /// input rejection; everything else is a success, including all-empty
    /// extraction results.
    #[error("current record is empty, nothing to analyze")]
    EmptyRecord,

    /// The injected language provider failed. Surfaced separately from
    /// EmptyRecord so the presentation layer reports it as an
    /// infrastructure problem, not a validation warning.
    #[error("language provider failure: {0}")]
    Provider(#[from] ProviderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_wraps_into_analysis_error() {
        let err: AnalysisError = ProviderError::Connection("http://localhost:8600".into()).into();
        assert!(matches!(err, AnalysisError::Provider(_)));
    }

    #[test]
    fn error_messages_name_the_failure() {
        let err = ProviderError::Service {
            status: 503,
            body: "overloaded".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("overloaded"));
    }

    #[test]
    fn empty_record_is_not_a_provider_failure() {
        let err = AnalysisError::EmptyRecord;
        assert!(!matches!(err, AnalysisError::Provider(_)));
    }
}

//! Seams for the external language capabilities.
//!
//! Both capabilities are expensive to initialize, so they are explicit
//! injected dependencies: constructed once at startup, shared by `Arc`, and
//! trivially replaceable with stubs in tests. No component reaches into a
//! hidden global to find a model.

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Entity label assigned by the general-purpose NER model.
///
/// The model has no drug-specific category; model-mode extraction uses
/// `Organization` and `Miscellaneous` spans as medication candidates, a
/// deliberately loose proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanLabel {
    Person,
    Organization,
    Location,
    Miscellaneous,
    Other,
}

impl SpanLabel {
    /// Map a raw tag string from the NER service onto a label.
    /// Unknown tags collapse to `Other` and are never extracted from.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "PER" | "PERSON" => Self::Person,
            "ORG" | "ORGANIZATION" => Self::Organization,
            "LOC" | "LOCATION" | "GPE" => Self::Location,
            "MISC" | "MISCELLANEOUS" => Self::Miscellaneous,
            _ => Self::Other,
        }
    }
}

/// A labeled text span produced by the NER model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanAnnotation {
    pub text: String,
    pub label: SpanLabel,
}

/// Tokenizer/NER capability: labeled spans plus sentence segmentation.
pub trait LanguageAnalyzer: Send + Sync {
    /// Run named-entity recognition over the text.
    fn annotate(&self, text: &str) -> Result<Vec<SpanAnnotation>, ProviderError>;

    /// Split the text into sentences.
    fn sentences(&self, text: &str) -> Result<Vec<String>, ProviderError>;
}

/// Abstractive summarization capability with explicit length bounds.
pub trait SummaryProvider: Send + Sync {
    fn summarize(&self, text: &str, min_len: u32, max_len: u32)
        -> Result<String, ProviderError>;
}

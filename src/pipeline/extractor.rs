//! Entity extraction: one interface, two interchangeable modes.
//!
//! Pattern mode is a pure regex/vocabulary scan and works with no model at
//! all. Model mode runs the injected NER capability and uses its
//! organization/miscellaneous spans as medication candidates. The mode is
//! chosen at construction time and never mixed within one deployment.
//!
//! Extraction is total: empty, malformed, or non-clinical text yields
//! sparse or empty sets. The only error path is an infrastructure failure
//! of the injected provider (pattern mode has none).

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::pipeline::provider::{LanguageAnalyzer, SpanLabel};
use crate::pipeline::types::EntitySet;
use crate::pipeline::vocabulary::{DOSAGE_PATTERN, MEDICATION_PATTERN, SYMPTOM_VOCABULARY};

/// Which extraction strategy a deployment runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    /// Regex + vocabulary scan, no model required.
    Pattern,
    /// NER model via the injected analyzer.
    Model,
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern => write!(f, "pattern"),
            Self::Model => write!(f, "model"),
        }
    }
}

impl std::str::FromStr for ExtractionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pattern" => Ok(Self::Pattern),
            "model" => Ok(Self::Model),
            other => Err(format!("unknown extraction mode: {other}")),
        }
    }
}

/// Detects medication, dosage, and symptom mentions in free text.
pub trait EntityExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Result<EntitySet, ProviderError>;
}

/// Pattern-mode extractor.
///
/// Medications are matches of the "<word sequence> <integer> mg" pattern
/// with the dosage folded into the mention; `dosages` stays empty. Symptoms
/// are vocabulary entries occurring as substrings of the lowercased text,
/// which can fire inside longer unrelated words ("dor" in "dormiu"), a
/// known precision limit, not a bug.
pub struct PatternExtractor;

impl EntityExtractor for PatternExtractor {
    fn extract(&self, text: &str) -> Result<EntitySet, ProviderError> {
        let mut entities = EntitySet::default();
        if text.trim().is_empty() {
            return Ok(entities);
        }

        for m in MEDICATION_PATTERN.find_iter(text) {
            let mention = m.as_str().trim();
            if !mention.is_empty() {
                entities.medications.insert(mention.to_string());
            }
        }

        let lowered = text.to_lowercase();
        for symptom in SYMPTOM_VOCABULARY {
            if lowered.contains(symptom) {
                entities.symptoms.insert((*symptom).to_string());
            }
        }

        Ok(entities)
    }
}

/// Model-mode extractor over an injected NER capability.
///
/// Medication candidates are spans the model labels organization or
/// miscellaneous, a loose proxy, since the general-purpose model has no
/// drug category. Dosages come from an independent regex scan and are
/// collected separately. Symptoms require exact token equality against the
/// vocabulary, so "dormiu" does not produce "dor" here.
pub struct ModelExtractor {
    analyzer: Arc<dyn LanguageAnalyzer>,
}

impl ModelExtractor {
    pub fn new(analyzer: Arc<dyn LanguageAnalyzer>) -> Self {
        Self { analyzer }
    }
}

impl EntityExtractor for ModelExtractor {
    fn extract(&self, text: &str) -> Result<EntitySet, ProviderError> {
        let mut entities = EntitySet::default();
        if text.trim().is_empty() {
            // No provider call for blank input.
            return Ok(entities);
        }

        for span in self.analyzer.annotate(text)? {
            if matches!(span.label, SpanLabel::Organization | SpanLabel::Miscellaneous) {
                let mention = span.text.trim();
                if !mention.is_empty() {
                    entities.medications.insert(mention.to_string());
                }
            }
        }

        for m in DOSAGE_PATTERN.find_iter(text) {
            entities.dosages.insert(m.as_str().trim().to_string());
        }

        for token in tokenize(text) {
            if SYMPTOM_VOCABULARY.contains(&token.as_str()) {
                entities.symptoms.insert(token);
            }
        }

        Ok(entities)
    }
}

/// Whitespace/punctuation-aware tokenization, lowercased.
fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            word.extend(ch.to_lowercase());
        } else if !word.is_empty() {
            tokens.push(std::mem::take(&mut word));
        }
    }
    if !word.is_empty() {
        tokens.push(word);
    }

    tokens
}

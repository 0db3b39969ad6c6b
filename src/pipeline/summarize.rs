//! Record summarization: three interchangeable strategies.
//!
//! The extractor and change detector never depend on which strategy is
//! active; the choice is configuration, resolved once at startup.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::pipeline::provider::{LanguageAnalyzer, SummaryProvider};

/// Length bounds for the abstractive strategy, in token-equivalent units.
const NEURAL_MIN_LEN: u32 = 30;
const NEURAL_MAX_LEN: u32 = 130;

/// Default number of leading sentences kept by the truncating strategies.
pub const DEFAULT_MAX_SENTENCES: usize = 3;

/// Which summarization strategy a deployment runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStrategy {
    /// Keep the first N '.'-delimited segments. No model required.
    Truncate,
    /// Keep the first N sentences from the analyzer's segmenter.
    Sentences,
    /// Abstractive summary from the summarization model.
    Neural,
}

impl fmt::Display for SummaryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncate => write!(f, "truncate"),
            Self::Sentences => write!(f, "sentences"),
            Self::Neural => write!(f, "neural"),
        }
    }
}

impl std::str::FromStr for SummaryStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truncate" => Ok(Self::Truncate),
            "sentences" => Ok(Self::Sentences),
            "neural" => Ok(Self::Neural),
            other => Err(format!("unknown summary strategy: {other}")),
        }
    }
}

/// Produces a short summary of one record.
pub trait Summarizer: Send + Sync {
    fn summarize(&self, text: &str) -> Result<String, ProviderError>;
}

/// Naive truncation: first N '.'-delimited segments, re-terminated.
pub struct TruncateSummarizer {
    max_sentences: usize,
}

impl TruncateSummarizer {
    pub fn new(max_sentences: usize) -> Self {
        Self { max_sentences }
    }
}

impl Default for TruncateSummarizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SENTENCES)
    }
}

impl Summarizer for TruncateSummarizer {
    fn summarize(&self, text: &str) -> Result<String, ProviderError> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let mut summary = text
            .split('.')
            .take(self.max_sentences)
            .collect::<Vec<_>>()
            .join(".")
            .trim()
            .to_string();
        if !summary.ends_with('.') {
            summary.push('.');
        }
        Ok(summary)
    }
}

/// Model-segmented truncation: first N sentences from the analyzer.
pub struct SentenceSummarizer {
    analyzer: Arc<dyn LanguageAnalyzer>,
    max_sentences: usize,
}

impl SentenceSummarizer {
    pub fn new(analyzer: Arc<dyn LanguageAnalyzer>, max_sentences: usize) -> Self {
        Self {
            analyzer,
            max_sentences,
        }
    }
}

impl Summarizer for SentenceSummarizer {
    fn summarize(&self, text: &str) -> Result<String, ProviderError> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let sentences = self.analyzer.sentences(text)?;
        Ok(sentences
            .iter()
            .take(self.max_sentences)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" "))
    }
}

/// Abstractive summary with fixed length bounds.
pub struct NeuralSummarizer {
    provider: Arc<dyn SummaryProvider>,
}

impl NeuralSummarizer {
    pub fn new(provider: Arc<dyn SummaryProvider>) -> Self {
        Self { provider }
    }
}

impl Summarizer for NeuralSummarizer {
    fn summarize(&self, text: &str) -> Result<String, ProviderError> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        self.provider
            .summarize(text, NEURAL_MIN_LEN, NEURAL_MAX_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::provider::SpanAnnotation;

    // ── Truncate ────────────────────────────────────────

    #[test]
    fn truncate_keeps_first_three_segments() {
        let summarizer = TruncateSummarizer::default();
        let text = "Paciente estável. Sem queixas. Alta amanhã. Retorno em 30 dias.";
        let summary = summarizer.summarize(text).unwrap();
        assert_eq!(summary, "Paciente estável. Sem queixas. Alta amanhã.");
    }

    #[test]
    fn truncate_short_text_passes_through_terminated() {
        let summarizer = TruncateSummarizer::default();
        assert_eq!(
            summarizer.summarize("Paciente sente febre").unwrap(),
            "Paciente sente febre."
        );
    }

    #[test]
    fn truncate_preserves_existing_terminator() {
        let summarizer = TruncateSummarizer::default();
        assert_eq!(
            summarizer.summarize("Sem queixas.").unwrap(),
            "Sem queixas."
        );
    }

    #[test]
    fn truncate_blank_text_yields_empty_summary() {
        let summarizer = TruncateSummarizer::default();
        assert_eq!(summarizer.summarize("  ").unwrap(), "");
    }

    #[test]
    fn truncate_respects_custom_limit() {
        let summarizer = TruncateSummarizer::new(1);
        assert_eq!(
            summarizer.summarize("Primeira. Segunda. Terceira.").unwrap(),
            "Primeira."
        );
    }

    // ── Sentences ───────────────────────────────────────

    struct SegmentingStub;

    impl LanguageAnalyzer for SegmentingStub {
        fn annotate(&self, _text: &str) -> Result<Vec<SpanAnnotation>, ProviderError> {
            Ok(Vec::new())
        }

        fn sentences(&self, text: &str) -> Result<Vec<String>, ProviderError> {
            Ok(text
                .split_inclusive('.')
                .map(|s| s.trim().to_string())
                .collect())
        }
    }

    #[test]
    fn sentence_summarizer_joins_first_sentences() {
        let summarizer = SentenceSummarizer::new(Arc::new(SegmentingStub), 2);
        let summary = summarizer
            .summarize("Primeira frase. Segunda frase. Terceira frase.")
            .unwrap();
        assert_eq!(summary, "Primeira frase. Segunda frase.");
    }

    #[test]
    fn sentence_summarizer_propagates_provider_failure() {
        struct FailingStub;
        impl LanguageAnalyzer for FailingStub {
            fn annotate(&self, _t: &str) -> Result<Vec<SpanAnnotation>, ProviderError> {
                Err(ProviderError::Connection("http://localhost:8600".into()))
            }
            fn sentences(&self, _t: &str) -> Result<Vec<String>, ProviderError> {
                Err(ProviderError::Connection("http://localhost:8600".into()))
            }
        }

        let summarizer = SentenceSummarizer::new(Arc::new(FailingStub), 3);
        assert!(summarizer.summarize("texto").is_err());
    }

    // ── Neural ──────────────────────────────────────────

    struct RecordingProvider {
        bounds: std::sync::Mutex<Option<(u32, u32)>>,
    }

    impl SummaryProvider for RecordingProvider {
        fn summarize(
            &self,
            _text: &str,
            min_len: u32,
            max_len: u32,
        ) -> Result<String, ProviderError> {
            *self.bounds.lock().unwrap() = Some((min_len, max_len));
            Ok("resumo abstrativo".to_string())
        }
    }

    #[test]
    fn neural_summarizer_uses_fixed_length_bounds() {
        let provider = Arc::new(RecordingProvider {
            bounds: std::sync::Mutex::new(None),
        });
        let summarizer = NeuralSummarizer::new(provider.clone());
        let summary = summarizer.summarize("prontuário longo").unwrap();
        assert_eq!(summary, "resumo abstrativo");
        assert_eq!(*provider.bounds.lock().unwrap(), Some((30, 130)));
    }

    // ── Strategy selection ──────────────────────────────

    #[test]
    fn summary_strategy_parses_from_str() {
        assert_eq!("truncate".parse::<SummaryStrategy>(), Ok(SummaryStrategy::Truncate));
        assert_eq!("Sentences".parse::<SummaryStrategy>(), Ok(SummaryStrategy::Sentences));
        assert_eq!("neural".parse::<SummaryStrategy>(), Ok(SummaryStrategy::Neural));
        assert!("fancy".parse::<SummaryStrategy>().is_err());
    }

    #[test]
    fn summary_strategy_display_round_trips() {
        for strategy in [
            SummaryStrategy::Truncate,
            SummaryStrategy::Sentences,
            SummaryStrategy::Neural,
        ] {
            assert_eq!(strategy.to_string().parse::<SummaryStrategy>(), Ok(strategy));
        }
    }
}

pub mod changes;
pub mod extractor;
pub mod nlp_client;
pub mod orchestrator;
pub mod provider;
pub mod summarize;
pub mod types;
pub mod vocabulary;

pub use changes::detect_changes;
pub use extractor::{EntityExtractor, ExtractionMode, ModelExtractor, PatternExtractor};
pub use nlp_client::NlpServiceClient;
pub use orchestrator::TriageService;
pub use provider::{LanguageAnalyzer, SpanAnnotation, SpanLabel, SummaryProvider};
pub use summarize::{
    NeuralSummarizer, SentenceSummarizer, SummaryStrategy, Summarizer, TruncateSummarizer,
};
pub use types::{AttentionTag, EntitySet, TriageReport};

//! Triage orchestrator: one synchronous analysis run per call.
//!
//! Wires the configured extractor, the configured summarizer, and the
//! change detector. Holds no state across calls; the injected providers are
//! the only long-lived resources.

use std::sync::Arc;

use crate::error::AnalysisError;
use crate::pipeline::changes::detect_changes;
use crate::pipeline::extractor::EntityExtractor;
use crate::pipeline::summarize::Summarizer;
use crate::pipeline::types::TriageReport;

pub struct TriageService {
    extractor: Arc<dyn EntityExtractor>,
    summarizer: Arc<dyn Summarizer>,
}

impl TriageService {
    pub fn new(extractor: Arc<dyn EntityExtractor>, summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            extractor,
            summarizer,
        }
    }

    /// Analyze the current record, optionally against a previous one.
    ///
    /// A blank current record is the single input rejection
    /// (`AnalysisError::EmptyRecord`); an all-empty extraction result is a
    /// valid success. A blank or absent previous record means no comparison
    /// happens and the report carries `had_previous = false`.
    pub fn analyze(
        &self,
        previous: Option<&str>,
        current: &str,
    ) -> Result<TriageReport, AnalysisError> {
        if current.trim().is_empty() {
            return Err(AnalysisError::EmptyRecord);
        }

        let previous = previous.map(str::trim).filter(|text| !text.is_empty());

        let previous_entities = previous
            .map(|text| self.extractor.extract(text))
            .transpose()?;
        let entities = self.extractor.extract(current)?;
        let tags = detect_changes(previous_entities.as_ref(), &entities);
        let summary = self.summarizer.summarize(current)?;

        tracing::debug!(
            mentions = entities.mention_count(),
            tags = tags.len(),
            had_previous = previous.is_some(),
            "analysis run complete"
        );

        Ok(TriageReport {
            report_id: uuid::Uuid::new_v4(),
            analyzed_at: chrono::Utc::now().naive_utc(),
            summary,
            entities,
            tags,
            had_previous: previous.is_some(),
        })
    }
}

//! Result types for a single triage run.
//!
//! Everything here is created fresh per request and discarded after the
//! response is rendered; nothing persists between runs.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Detected entity mentions for one record.
///
/// Set semantics: duplicate mentions collapse and callers must not rely on
/// insertion order. All three fields are always present; members are
/// non-empty, trimmed strings. `dosages` is only populated in model mode;
/// pattern mode folds the dosage into the medication string and leaves it
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySet {
    pub medications: BTreeSet<String>,
    pub symptoms: BTreeSet<String>,
    pub dosages: BTreeSet<String>,
}

impl EntitySet {
    /// True when no mention of any kind was detected.
    pub fn is_empty(&self) -> bool {
        self.medications.is_empty() && self.symptoms.is_empty() && self.dosages.is_empty()
    }

    /// Total number of detected mentions across all categories.
    pub fn mention_count(&self) -> usize {
        self.medications.len() + self.symptoms.len() + self.dosages.len()
    }
}

/// Flag raised when the current record contains an entity category not
/// present in the previous record. Produced, never mutated, consumed
/// immediately by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttentionTag {
    NewMedication,
    NewSymptom,
}

impl AttentionTag {
    /// Human-readable label, in the language of the records themselves.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NewMedication => "Nova medicação",
            Self::NewSymptom => "Novo sintoma detectado",
        }
    }
}

impl fmt::Display for AttentionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one analysis run, handed to the presentation layer as three
/// independent values (summary, entities, tags).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageReport {
    pub report_id: Uuid,
    pub analyzed_at: chrono::NaiveDateTime,
    /// Short summary of the current record.
    pub summary: String,
    /// Entities detected in the current record.
    pub entities: EntitySet,
    /// Attention tags relative to the previous record.
    pub tags: Vec<AttentionTag>,
    /// Whether a previous record was supplied. Lets the caller distinguish
    /// "no previous record" from "no new findings"; both produce an empty
    /// tag list.
    pub had_previous: bool,
}

//! Symptom vocabulary and compiled scan patterns.
//!
//! The vocabulary is a fixed, ordered set of Portuguese symptom surface
//! forms; process-wide constant, no lifecycle beyond startup. Matching
//! semantics differ per extraction mode: pattern mode tests substring
//! containment against the lowercased full text (so an entry can match
//! inside a longer unrelated word), model mode requires exact token
//! equality. The asymmetry is deliberate and documented here rather than
//! papered over in either mode.

use std::sync::LazyLock;

use regex::Regex;

/// Known symptom surface forms. Entries must be lowercase.
pub const SYMPTOM_VOCABULARY: &[&str] = &[
    "dor",
    "tontura",
    "fadiga",
    "febre",
    "pressão",
    "infecção",
    "náusea",
    "vômito",
];

/// Medication mention: a word sequence ending in an integer dose in mg,
/// e.g. "Dipirona 500mg" or "toma Losartana 50 mg". Case-insensitive.
/// Known precision limit: any phrase ending in a dosage matches, drug name
/// or not.
pub static MEDICATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[\w\s]+?\d+\s?mg\b").expect("valid medication pattern"));

/// Bare dosage mention: "<integer><optional space>mg".
pub static DOSAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b\d+\s?mg\b").expect("valid dosage pattern"));

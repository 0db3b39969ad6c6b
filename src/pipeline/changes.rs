//! Change detection between two entity sets.

use crate::pipeline::types::{AttentionTag, EntitySet};

/// Compare the current record's entities against the previous record's.
///
/// With no previous record there is nothing to compare against and the
/// result is empty; the caller distinguishes that case from "no new
/// findings" via `TriageReport::had_previous`. Otherwise a tag is emitted
/// per entity category whose current set is not a subset of the previous
/// one. The medication check runs first only to keep output order
/// deterministic; it carries no priority.
///
/// Dosage changes never raise a tag: a dosage edit on an already-known
/// medication is not flagged by itself.
///
/// Pure function: no I/O, no side effects, no failure path.
pub fn detect_changes(previous: Option<&EntitySet>, current: &EntitySet) -> Vec<AttentionTag> {
    let Some(previous) = previous else {
        return Vec::new();
    };

    let mut tags = Vec::new();

    if current
        .medications
        .difference(&previous.medications)
        .next()
        .is_some()
    {
        tags.push(AttentionTag::NewMedication);
    }

    if current
        .symptoms
        .difference(&previous.symptoms)
        .next()
        .is_some()
    {
        tags.push(AttentionTag::NewSymptom);
    }

    tags
}

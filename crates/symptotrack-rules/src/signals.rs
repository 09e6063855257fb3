//! Signal extraction: the inputs the rule chain reasons over.

use std::collections::HashSet;

use symptotrack_core::models::{PainTrend, PatientAssessmentRequest, Signals};

use crate::vocabulary::RuleSet;

/// Compare two pain scores. Any `i32` is accepted; the delta saturates.
pub fn compute_pain_trend(pain_today: i32, pain_previous: i32) -> PainTrend {
    if pain_today > pain_previous {
        PainTrend::Increased {
            delta: pain_today.saturating_sub(pain_previous),
        }
    } else if pain_today < pain_previous {
        PainTrend::Decreased
    } else {
        PainTrend::Stable
    }
}

/// Danger words occurring anywhere in `transcript_text`.
///
/// Plain case-insensitive substring search, not tokenized: "heartbeat"
/// matches "heart". Results follow `danger_words` order, each word once.
pub fn extract_keywords(transcript_text: &str, danger_words: &[String]) -> Vec<String> {
    if transcript_text.is_empty() {
        return Vec::new();
    }

    let haystack = transcript_text.to_lowercase();
    let mut found: Vec<String> = Vec::new();
    for word in danger_words {
        let needle = word.to_lowercase();
        if needle.is_empty() || found.iter().any(|f| f.to_lowercase() == needle) {
            continue;
        }
        if haystack.contains(&needle) {
            found.push(word.clone());
        }
    }
    found
}

/// Checklist entries that exactly match a critical tag after trimming and
/// lowercasing.
///
/// Output keeps checklist order. Entries are returned trimmed, and an
/// entry repeated in the checklist is reported once, at its first
/// position.
pub fn match_critical_tags(checklist_symptoms: &[String], critical_tags: &[String]) -> Vec<String> {
    let critical: HashSet<String> = critical_tags
        .iter()
        .map(|t| t.trim().to_lowercase())
        .collect();

    let mut seen = HashSet::new();
    let mut matched = Vec::new();
    for entry in checklist_symptoms {
        let trimmed = entry.trim();
        let normalized = trimmed.to_lowercase();
        if critical.contains(&normalized) && seen.insert(normalized) {
            matched.push(trimmed.to_string());
        }
    }
    matched
}

/// Derive all signals for a request.
pub fn extract_signals(request: &PatientAssessmentRequest, rule_set: &RuleSet) -> Signals {
    Signals {
        pain_trend: compute_pain_trend(request.pain_today, request.pain_previous),
        found_keywords: extract_keywords(&request.transcript_text, &rule_set.danger_words),
        found_critical_tags: match_critical_tags(
            &request.checklist_symptoms,
            &rule_set.critical_tags,
        ),
    }
}

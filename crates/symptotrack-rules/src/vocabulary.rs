use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::RulesError;

/// Version of the built-in vocabulary. Bump when any default list or
/// threshold changes so stored assessments stay attributable.
pub const DEFAULT_VERSION: u32 = 2;

const DEFAULT_DANGER_WORDS: &[&str] = &[
    "sharp",
    "chest",
    "breath",
    "bleeding",
    "faint",
    "unbearable",
    "numb",
    "vomit",
    "swollen",
    "confused",
];

const DEFAULT_CRITICAL_TAGS: &[&str] = &[
    "chest pain",
    "shortness of breath",
    "difficulty breathing",
    "severe bleeding",
    "loss of consciousness",
    "fainting",
    "confusion",
    "high fever",
];

/// The versioned vocabulary and thresholds the rule chain runs against.
///
/// Lists are ordered: danger words are reported in this order, never in
/// order of appearance in the transcript. Matching is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RuleSet {
    pub version: u32,
    pub danger_words: Vec<String>,
    pub critical_tags: Vec<String>,
    /// `pain_today` at or above this is critical on its own.
    pub critical_pain_threshold: i32,
    /// `pain_today - pain_previous` at or above this is a spike.
    pub spike_threshold: i32,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION,
            danger_words: DEFAULT_DANGER_WORDS.iter().map(|s| s.to_string()).collect(),
            critical_tags: DEFAULT_CRITICAL_TAGS.iter().map(|s| s.to_string()).collect(),
            critical_pain_threshold: 7,
            spike_threshold: 2,
        }
    }
}

impl RuleSet {
    /// Parse and validate a rule set from JSON.
    pub fn from_json(json: &str) -> Result<Self, RulesError> {
        let rule_set: RuleSet = serde_json::from_str(json)?;
        rule_set.validate()?;
        Ok(rule_set)
    }

    /// Load and validate a rule set from a JSON file.
    pub fn load(path: &Path) -> Result<Self, RulesError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Reject vocabularies that would make matching ill-defined.
    ///
    /// A blank danger word is a substring of every transcript, so blanks
    /// are refused outright. Duplicates are compared case-insensitively.
    pub fn validate(&self) -> Result<(), RulesError> {
        check_list("danger_words", &self.danger_words)?;
        check_list("critical_tags", &self.critical_tags)?;
        Ok(())
    }
}

fn check_list(name: &str, entries: &[String]) -> Result<(), RulesError> {
    let mut seen = HashSet::new();
    for entry in entries {
        let normalized = entry.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(RulesError::InvalidRuleSet(format!(
                "{name} contains a blank entry"
            )));
        }
        if !seen.insert(normalized) {
            return Err(RulesError::InvalidRuleSet(format!(
                "{name} contains duplicate entry '{entry}'"
            )));
        }
    }
    Ok(())
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::risk::{PainTrend, RiskLevel};

/// Intermediate signals derived from a request before any rule runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Signals {
    pub pain_trend: PainTrend,
    /// Danger words found in the transcript, in danger-word-list order.
    pub found_keywords: Vec<String>,
    /// Checklist entries that matched a critical tag, in checklist order.
    pub found_critical_tags: Vec<String>,
}

/// The verdict for one assessment, with the request fields echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub patient_id: String,
    pub pain_today: i32,
    pub pain_previous: i32,
    pub transcript_text: String,
    pub checklist_symptoms: Vec<String>,

    pub pain_trend: PainTrend,
    pub found_keywords: Vec<String>,
    pub found_critical_tags: Vec<String>,

    pub risk_level: RiskLevel,
    /// One entry per fired rule in evaluation order, or the single
    /// "no risk" message. Never empty.
    pub explanations: Vec<String>,
    /// Ids of the rules that fired, parallel to `explanations` when HIGH.
    pub fired_rules: Vec<String>,
    pub rule_set_version: u32,
}

impl AssessmentResult {
    pub fn is_high_risk(&self) -> bool {
        self.risk_level == RiskLevel::High
    }

    /// Explanations flattened for a single storage column.
    pub fn joined_explanations(&self) -> String {
        self.explanations.join(", ")
    }
}

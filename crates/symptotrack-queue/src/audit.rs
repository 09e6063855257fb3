use serde::Serialize;
use symptotrack_core::models::{AssessmentResult, RiskLevel, SymptomRecord};
use tracing::info;
use uuid::Uuid;

/// Audit trail entry for a verdict written back to the store.
///
/// Carries enough to reproduce the verdict later: which rules fired and
/// against which vocabulary version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentAudit {
    pub record_id: Uuid,
    pub subject_id: String,
    pub risk_level: RiskLevel,
    pub fired_rules: Vec<String>,
    pub rule_set_version: u32,
}

impl AssessmentAudit {
    pub fn new(record: &SymptomRecord, result: &AssessmentResult) -> Self {
        Self {
            record_id: record.id,
            subject_id: record.user_id.clone(),
            risk_level: result.risk_level,
            fired_rules: result.fired_rules.clone(),
            rule_set_version: result.rule_set_version,
        }
    }

    /// Emit via tracing with `audit.*` fields.
    pub fn emit(&self) {
        info!(
            audit.action = "assess",
            audit.record_id = %self.record_id,
            audit.subject_id = %self.subject_id,
            audit.risk_level = %self.risk_level,
            audit.fired_rules = %self.fired_rules.join(","),
            audit.rule_set_version = self.rule_set_version,
            "audit event"
        );
    }
}

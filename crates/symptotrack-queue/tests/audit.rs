use symptotrack_core::models::{PatientAssessmentRequest, RiskLevel, SymptomRecord};
use symptotrack_queue::audit::AssessmentAudit;
use symptotrack_rules::{RuleSet, assess};

#[test]
fn audit_captures_fired_rules_and_vocabulary_version() {
    let record = SymptomRecord::new("P001", 8, "2026-03-01T09:00:00Z".parse().unwrap());
    let request = PatientAssessmentRequest::new("P001", 8, 5);
    let result = assess(&request, &RuleSet::default());

    let audit = AssessmentAudit::new(&record, &result);
    assert_eq!(audit.record_id, record.id);
    assert_eq!(audit.subject_id, "P001");
    assert_eq!(audit.risk_level, RiskLevel::High);
    assert_eq!(audit.fired_rules, vec!["critical_pain", "pain_spike"]);
    assert_eq!(audit.rule_set_version, RuleSet::default().version);

    // Emitting without a subscriber installed is a no-op.
    audit.emit();
}

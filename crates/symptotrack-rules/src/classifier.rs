//! The rule chain.
//!
//! Rules run in registry order and are independent of each other. Each one
//! that fires raises the level and appends its explanation; nothing lowers
//! the level once raised, so rule order only affects explanation order.

use symptotrack_core::models::{AssessmentResult, PatientAssessmentRequest, RiskLevel, Signals};

use crate::vocabulary::RuleSet;
use crate::{RuleInput, all_rules, signals};

/// Sole explanation when no rule fires.
pub const DEFAULT_EXPLANATION: &str = "Vitals stable, no immediate risk detected";

/// Extract signals and run the rule chain.
pub fn assess(request: &PatientAssessmentRequest, rule_set: &RuleSet) -> AssessmentResult {
    let signals = signals::extract_signals(request, rule_set);
    classify(request, signals, rule_set)
}

/// Run the rule chain over signals that were already extracted.
pub fn classify(
    request: &PatientAssessmentRequest,
    signals: Signals,
    rule_set: &RuleSet,
) -> AssessmentResult {
    let input = RuleInput {
        request,
        signals: &signals,
        rule_set,
    };

    let mut risk_level = RiskLevel::Low;
    let mut explanations = Vec::new();
    let mut fired_rules = Vec::new();

    for rule in all_rules() {
        if let Some(explanation) = rule.evaluate(&input) {
            risk_level = risk_level.escalate(rule.level());
            explanations.push(explanation);
            fired_rules.push(rule.id().to_string());
        }
    }

    if explanations.is_empty() {
        explanations.push(DEFAULT_EXPLANATION.to_string());
    }

    AssessmentResult {
        patient_id: request.patient_id.clone(),
        pain_today: request.pain_today,
        pain_previous: request.pain_previous,
        transcript_text: request.transcript_text.clone(),
        checklist_symptoms: request.checklist_symptoms.clone(),
        pain_trend: signals.pain_trend,
        found_keywords: signals.found_keywords,
        found_critical_tags: signals.found_critical_tags,
        risk_level,
        explanations,
        fired_rules,
        rule_set_version: rule_set.version,
    }
}

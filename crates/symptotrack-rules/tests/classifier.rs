use symptotrack_core::models::{PainTrend, PatientAssessmentRequest, RiskLevel};
use symptotrack_rules::{DEFAULT_EXPLANATION, RuleSet, all_rules, assess, get_rule};

fn request(pain_today: i32, pain_previous: i32) -> PatientAssessmentRequest {
    PatientAssessmentRequest::new("P001", pain_today, pain_previous)
}

#[test]
fn checklist_tag_escalates_even_when_pain_decreases() {
    let req = request(1, 4).with_checklist(["chest pain"]);
    let result = assess(&req, &RuleSet::default());

    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.pain_trend, PainTrend::Decreased);
    assert!(
        result
            .explanations
            .contains(&"Critical checklist items: chest pain".to_string())
    );
}

#[test]
fn absolute_pain_escalates_without_change() {
    let req = request(8, 8).with_transcript("feeling fine");
    let result = assess(&req, &RuleSet::default());

    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.pain_trend, PainTrend::Stable);
    assert_eq!(result.explanations, vec!["Critical Pain Level (8/10)"]);
    assert_eq!(result.fired_rules, vec!["critical_pain"]);
}

#[test]
fn keywords_and_spike_both_explained_in_rule_order() {
    let req = request(3, 1).with_transcript("I have sharp chest pain");
    let result = assess(&req, &RuleSet::default());

    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.found_keywords, vec!["sharp", "chest"]);
    assert_eq!(
        result.explanations,
        vec![
            "Pain spiked significantly",
            "Critical symptoms detected: sharp, chest",
        ]
    );
    assert_eq!(result.fired_rules, vec!["pain_spike", "danger_keywords"]);
}

#[test]
fn benign_input_is_low_with_default_explanation() {
    let req = request(2, 2)
        .with_transcript("all good, sleeping fine")
        .with_checklist(["mild headache"]);
    let result = assess(&req, &RuleSet::default());

    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(result.explanations, vec![DEFAULT_EXPLANATION]);
    assert!(result.fired_rules.is_empty());
    assert!(result.found_keywords.is_empty());
    assert!(result.found_critical_tags.is_empty());
}

#[test]
fn critical_pain_fires_for_every_score_at_or_above_seven() {
    let rule_set = RuleSet::default();
    for today in 7..=10 {
        for previous in 0..=10 {
            let result = assess(&request(today, previous), &rule_set);
            assert_eq!(result.risk_level, RiskLevel::High);
            assert!(
                result
                    .explanations
                    .iter()
                    .any(|e| e.starts_with("Critical Pain Level"))
            );
        }
    }
}

#[test]
fn spike_of_two_or_more_is_high_below_critical_pain() {
    let rule_set = RuleSet::default();
    for today in 2..7 {
        for previous in 0..=today - 2 {
            let result = assess(&request(today, previous), &rule_set);
            assert_eq!(result.risk_level, RiskLevel::High, "{today} vs {previous}");
            assert_eq!(result.explanations, vec!["Pain spiked significantly"]);
        }
    }
}

#[test]
fn spike_of_one_is_not_significant() {
    let result = assess(&request(4, 3), &RuleSet::default());
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(result.pain_trend, PainTrend::Increased { delta: 1 });
}

#[test]
fn all_rules_fire_together() {
    let req = request(9, 2)
        .with_transcript("Bleeding and feeling faint")
        .with_checklist(["Fatigue", "Loss of Consciousness"]);
    let result = assess(&req, &RuleSet::default());

    assert_eq!(
        result.explanations,
        vec![
            "Critical Pain Level (9/10)",
            "Pain spiked significantly",
            "Critical symptoms detected: bleeding, faint",
            "Critical checklist items: Loss of Consciousness",
        ]
    );
    assert_eq!(result.fired_rules.len(), all_rules().len());
}

#[test]
fn same_input_gives_identical_result() {
    let req = request(5, 1)
        .with_transcript("sharp pain")
        .with_checklist(["chest pain"]);
    let rule_set = RuleSet::default();

    let first = serde_json::to_vec(&assess(&req, &rule_set)).unwrap();
    let second = serde_json::to_vec(&assess(&req, &rule_set)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn inputs_are_echoed_unmodified() {
    let req = request(3, 3)
        .with_transcript("  Mixed CASE text ")
        .with_checklist([" Chest Pain", "other"]);
    let result = assess(&req, &RuleSet::default());

    assert_eq!(result.patient_id, req.patient_id);
    assert_eq!(result.transcript_text, req.transcript_text);
    assert_eq!(result.checklist_symptoms, req.checklist_symptoms);
    assert_eq!(result.pain_today, 3);
    assert_eq!(result.pain_previous, 3);
}

#[test]
fn high_iff_some_rule_fired() {
    let rule_set = RuleSet::default();
    let transcripts = ["", "sharp", "fine"];
    let checklists: [&[&str]; 3] = [&[], &["chest pain"], &["nausea"]];
    for today in -1..=11 {
        for previous in -1..=11 {
            for transcript in transcripts {
                for checklist in checklists {
                    let req = request(today, previous)
                        .with_transcript(transcript)
                        .with_checklist(checklist.iter().copied());
                    let result = assess(&req, &rule_set);
                    assert_eq!(result.is_high_risk(), !result.fired_rules.is_empty());
                    assert!(!result.explanations.is_empty());
                }
            }
        }
    }
}

#[test]
fn custom_thresholds_are_honoured() {
    let rule_set = RuleSet {
        critical_pain_threshold: 9,
        spike_threshold: 4,
        ..RuleSet::default()
    };
    let result = assess(&request(8, 5), &rule_set);
    assert_eq!(result.risk_level, RiskLevel::Low);

    let result = assess(&request(9, 5), &rule_set);
    assert_eq!(result.fired_rules, vec!["critical_pain", "pain_spike"]);
}

#[test]
fn result_records_rule_set_version() {
    let rule_set = RuleSet {
        version: 41,
        ..RuleSet::default()
    };
    assert_eq!(assess(&request(0, 0), &rule_set).rule_set_version, 41);
}

#[test]
fn registry_is_in_chain_order() {
    let ids: Vec<_> = all_rules().iter().map(|r| r.id()).collect();
    assert_eq!(
        ids,
        vec![
            "critical_pain",
            "pain_spike",
            "danger_keywords",
            "critical_tags",
        ]
    );
    assert_eq!(
        get_rule("pain_spike").map(|r| r.name()),
        Some("Significant spike")
    );
    assert!(get_rule("nonexistent").is_none());
}

use symptotrack_core::models::{PainTrend, RiskLevel};

#[test]
fn escalation_never_lowers() {
    assert_eq!(RiskLevel::Low.escalate(RiskLevel::High), RiskLevel::High);
    assert_eq!(RiskLevel::High.escalate(RiskLevel::Low), RiskLevel::High);
    assert_eq!(RiskLevel::Low.escalate(RiskLevel::Low), RiskLevel::Low);
}

#[test]
fn risk_level_display_matches_wire_form() {
    assert_eq!(RiskLevel::High.to_string(), "HIGH");
    assert_eq!(serde_json::to_string(&RiskLevel::Low).unwrap(), "\"LOW\"");
}

#[test]
fn pain_trend_serializes_with_direction_tag() {
    let json = serde_json::to_value(PainTrend::Increased { delta: 3 }).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "direction": "increased", "delta": 3 })
    );

    let json = serde_json::to_value(PainTrend::Stable).unwrap();
    assert_eq!(json, serde_json::json!({ "direction": "stable" }));
}

#[test]
fn pain_trend_display() {
    assert_eq!(
        PainTrend::Increased { delta: 2 }.to_string(),
        "Increased (+2)"
    );
    assert_eq!(PainTrend::Decreased.to_string(), "Decreased");
}

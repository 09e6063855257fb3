use symptotrack_cli::display::render_assessment;
use symptotrack_core::models::PatientAssessmentRequest;
use symptotrack_queue::AssessmentPipeline;
use symptotrack_rules::RuleSet;

#[test]
fn report_lists_explanations_in_order() {
    let pipeline = AssessmentPipeline::with_placeholder_model(RuleSet::default());
    let request =
        PatientAssessmentRequest::new("P001", 3, 1).with_transcript("I have sharp chest pain");
    let report = render_assessment(&pipeline.assess(&request));

    assert!(report.contains("PATIENT RISK ASSESSMENT (P001)"));
    assert!(report.contains("Trend: Increased (+2)"));
    assert!(report.contains("EXTRACTED KEYWORDS:\nsharp, chest\n"));
    assert!(report.contains("RISK LEVEL:\nHIGH\n"));
    assert!(report.contains(
        "1. Pain spiked significantly\n2. Critical symptoms detected: sharp, chest\n"
    ));
    assert!(report.contains("Prediction: HIGH (90% confidence)"));
}

#[test]
fn empty_sections_say_none() {
    let pipeline = AssessmentPipeline::with_placeholder_model(RuleSet::default());
    let request = PatientAssessmentRequest::new("P004", 0, 0);
    let report = render_assessment(&pipeline.assess(&request));

    assert!(report.contains("CHECKLIST SYMPTOMS:\nNone\n"));
    assert!(report.contains("TRANSCRIPT:\nNo transcript available\n"));
    assert!(report.contains("CRITICAL CHECKLIST ITEMS:\nNone\n"));
    assert!(report.contains("1. Vitals stable, no immediate risk detected"));
}

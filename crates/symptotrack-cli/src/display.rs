use std::fmt::Write;

use symptotrack_queue::Assessment;

/// Plain-text report for one assessment.
pub fn render_assessment(assessment: &Assessment) -> String {
    let result = &assessment.result;
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "PATIENT RISK ASSESSMENT ({})", result.patient_id);
    let _ = writeln!(out);

    let _ = writeln!(out, "PAIN LEVEL:");
    let _ = writeln!(out, "Today: {}", result.pain_today);
    let _ = writeln!(out, "Previous: {}", result.pain_previous);
    let _ = writeln!(out, "Trend: {}", result.pain_trend);
    let _ = writeln!(out);

    section_lines(&mut out, "CHECKLIST SYMPTOMS", &result.checklist_symptoms);

    let _ = writeln!(out, "TRANSCRIPT:");
    if result.transcript_text.is_empty() {
        let _ = writeln!(out, "No transcript available");
    } else {
        let _ = writeln!(out, "{}", result.transcript_text);
    }
    let _ = writeln!(out);

    section_joined(&mut out, "EXTRACTED KEYWORDS", &result.found_keywords);
    section_joined(
        &mut out,
        "CRITICAL CHECKLIST ITEMS",
        &result.found_critical_tags,
    );

    let _ = writeln!(out, "RISK LEVEL:");
    let _ = writeln!(out, "{}", result.risk_level);
    let _ = writeln!(out);

    let _ = writeln!(out, "EXPLANATION (rule set v{}):", result.rule_set_version);
    for (i, explanation) in result.explanations.iter().enumerate() {
        let _ = writeln!(out, "{}. {explanation}", i + 1);
    }

    if let Some(auxiliary) = &assessment.auxiliary {
        let _ = writeln!(out);
        let _ = writeln!(out, "AUXILIARY MODEL (informational):");
        let _ = writeln!(
            out,
            "Prediction: {} ({:.0}% confidence)",
            auxiliary.prediction.label,
            auxiliary.prediction.confidence * 100.0
        );
        for feature in &auxiliary.top_features {
            let _ = writeln!(out, "- {}: {:.2}", feature.feature, feature.weight);
        }
    }

    out
}

fn section_lines(out: &mut String, title: &str, items: &[String]) {
    let _ = writeln!(out, "{title}:");
    if items.is_empty() {
        let _ = writeln!(out, "None");
    }
    for item in items {
        let _ = writeln!(out, "{item}");
    }
    let _ = writeln!(out);
}

fn section_joined(out: &mut String, title: &str, items: &[String]) {
    let _ = writeln!(out, "{title}:");
    if items.is_empty() {
        let _ = writeln!(out, "None");
    } else {
        let _ = writeln!(out, "{}", items.join(", "));
    }
    let _ = writeln!(out);
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Everything the rule engine needs for one assessment.
///
/// Pain scores are clinically 0–10 but are not clamped here; the engine
/// classifies any integer by plain comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientAssessmentRequest {
    pub patient_id: String,
    pub pain_today: i32,
    pub pain_previous: i32,
    #[serde(default)]
    pub transcript_text: String,
    #[serde(default)]
    pub checklist_symptoms: Vec<String>,
}

impl PatientAssessmentRequest {
    pub fn new(patient_id: impl Into<String>, pain_today: i32, pain_previous: i32) -> Self {
        Self {
            patient_id: patient_id.into(),
            pain_today,
            pain_previous,
            transcript_text: String::new(),
            checklist_symptoms: Vec::new(),
        }
    }

    pub fn with_transcript(mut self, text: impl Into<String>) -> Self {
        self.transcript_text = text.into();
        self
    }

    pub fn with_checklist<I, S>(mut self, symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.checklist_symptoms = symptoms.into_iter().map(Into::into).collect();
        self
    }
}

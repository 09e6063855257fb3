use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::assessment::AssessmentResult;
use super::request::PatientAssessmentRequest;
use super::risk::RiskLevel;
use crate::error::CoreError;

/// A symptom check-in row as held by the record store.
///
/// Column names follow the store's schema. Loosely-typed columns are kept
/// raw here and resolved through the accessors below, so the rule engine
/// only ever sees validated values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomRecord {
    pub id: Uuid,
    pub user_id: String,
    /// Free-text note or transcript for this check-in.
    #[serde(default)]
    pub description: Option<String>,
    /// Comma-delimited checklist tags.
    #[serde(default)]
    pub symptoms: Option<String>,
    #[serde(rename = "painlvl", default)]
    pub pain_level: Option<serde_json::Value>,
    pub timestamp: jiff::Timestamp,
    /// `None` until the record has been assessed.
    #[serde(default)]
    pub risk_level: Option<RiskLevel>,
    #[serde(default)]
    pub ai_explanation: Option<String>,
}

impl SymptomRecord {
    pub fn new(user_id: impl Into<String>, pain_level: i32, timestamp: jiff::Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            description: None,
            symptoms: None,
            pain_level: Some(serde_json::Value::from(pain_level)),
            timestamp,
            risk_level: None,
            ai_explanation: None,
        }
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn with_symptoms(mut self, symptoms: impl Into<String>) -> Self {
        self.symptoms = Some(symptoms.into());
        self
    }

    pub fn is_processed(&self) -> bool {
        self.risk_level.is_some()
    }

    /// Resolve the stored pain value.
    ///
    /// Absent or `null` is `MissingField`; anything that is not a JSON
    /// integer representable as `i32` is `InvalidInput`. Strings and
    /// floats are rejected rather than coerced.
    pub fn pain_score(&self) -> Result<i32, CoreError> {
        let value = match &self.pain_level {
            None | Some(serde_json::Value::Null) => {
                return Err(CoreError::MissingField("painlvl".to_string()));
            }
            Some(v) => v,
        };

        let invalid = |reason: String| CoreError::InvalidInput {
            field: "painlvl".to_string(),
            reason,
        };

        let n = value
            .as_i64()
            .ok_or_else(|| invalid(format!("expected an integer, got {value}")))?;
        i32::try_from(n).map_err(|_| invalid(format!("{n} is out of range")))
    }

    /// Checklist tags split on commas, trimmed, blanks dropped.
    pub fn checklist(&self) -> Vec<String> {
        self.symptoms
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Build an engine request from this record.
    ///
    /// `pain_previous` defaults to today's score when there is no usable
    /// history, which yields a stable trend.
    pub fn to_request(
        &self,
        pain_previous: Option<i32>,
        transcript_text: String,
    ) -> Result<PatientAssessmentRequest, CoreError> {
        let pain_today = self.pain_score()?;
        Ok(PatientAssessmentRequest {
            patient_id: self.user_id.clone(),
            pain_today,
            pain_previous: pain_previous.unwrap_or(pain_today),
            transcript_text,
            checklist_symptoms: self.checklist(),
        })
    }
}

/// The columns written back to the store once a record is assessed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskUpdate {
    pub risk_level: RiskLevel,
    pub ai_explanation: String,
}

impl RiskUpdate {
    pub fn from_result(result: &AssessmentResult) -> Self {
        Self {
            risk_level: result.risk_level,
            ai_explanation: result.joined_explanations(),
        }
    }
}

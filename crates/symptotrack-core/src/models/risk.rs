use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Binary escalation state of an assessment.
///
/// Ordered `Low < High` so that escalation is a `max` and can never
/// move downward within one evaluation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum RiskLevel {
    #[default]
    Low,
    High,
}

impl RiskLevel {
    /// Raise to `to` if it is more severe. Never lowers.
    pub fn escalate(self, to: RiskLevel) -> RiskLevel {
        self.max(to)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of change between the previous and current pain score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(tag = "direction", rename_all = "snake_case")]
#[ts(export)]
pub enum PainTrend {
    /// Current score is higher; `delta` is `today - previous`.
    Increased { delta: i32 },
    Decreased,
    Stable,
}

impl fmt::Display for PainTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PainTrend::Increased { delta } => write!(f, "Increased (+{delta})"),
            PainTrend::Decreased => f.write_str("Decreased"),
            PainTrend::Stable => f.write_str("Stable"),
        }
    }
}

//! symptotrack-rules
//!
//! Deterministic risk-assessment rules. Pure logic: no I/O beyond loading
//! a rule vocabulary file, no logging. Every HIGH verdict carries the
//! explanation of the rule that produced it.

pub mod classifier;
pub mod error;
pub mod rules;
pub mod signals;
pub mod vocabulary;

use std::sync::LazyLock;

use symptotrack_core::models::{PatientAssessmentRequest, RiskLevel, Signals};

pub use classifier::{DEFAULT_EXPLANATION, assess, classify};
pub use vocabulary::RuleSet;

/// Everything a rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    pub request: &'a PatientAssessmentRequest,
    pub signals: &'a Signals,
    pub rule_set: &'a RuleSet,
}

/// Trait implemented by each escalation rule in the chain.
pub trait Rule: Send + Sync {
    /// Stable identifier recorded in `AssessmentResult::fired_rules`.
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Returns the explanation to record if the rule fires.
    fn evaluate(&self, input: &RuleInput<'_>) -> Option<String>;

    /// Level the assessment is raised to when this rule fires.
    fn level(&self) -> RiskLevel {
        RiskLevel::High
    }
}

static RULES: LazyLock<Vec<Box<dyn Rule>>> = LazyLock::new(|| {
    vec![
        Box::new(rules::critical_pain::CriticalPain),
        Box::new(rules::pain_spike::PainSpike),
        Box::new(rules::danger_keywords::DangerKeywords),
        Box::new(rules::critical_tags::CriticalTags),
    ]
});

/// All registered rules, in evaluation order.
pub fn all_rules() -> &'static [Box<dyn Rule>] {
    &RULES
}

/// Look up a rule by ID.
pub fn get_rule(id: &str) -> Option<&'static dyn Rule> {
    all_rules().iter().find(|r| r.id() == id).map(|r| r.as_ref())
}

use crate::{Rule, RuleInput};

/// Absolute pain at or above the critical threshold, regardless of history.
pub struct CriticalPain;

impl Rule for CriticalPain {
    fn id(&self) -> &str {
        "critical_pain"
    }

    fn name(&self) -> &str {
        "Critical absolute pain"
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<String> {
        let pain_today = input.request.pain_today;
        (pain_today >= input.rule_set.critical_pain_threshold)
            .then(|| format!("Critical Pain Level ({pain_today}/10)"))
    }
}

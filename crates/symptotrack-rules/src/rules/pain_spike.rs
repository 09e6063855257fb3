use crate::{Rule, RuleInput};

/// Pain rose by at least the spike threshold since the previous check-in.
pub struct PainSpike;

impl Rule for PainSpike {
    fn id(&self) -> &str {
        "pain_spike"
    }

    fn name(&self) -> &str {
        "Significant spike"
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<String> {
        let delta = input
            .request
            .pain_today
            .saturating_sub(input.request.pain_previous);
        (delta >= input.rule_set.spike_threshold).then(|| "Pain spiked significantly".to_string())
    }
}

use crate::{Rule, RuleInput};

/// Any danger word in the transcript.
pub struct DangerKeywords;

impl Rule for DangerKeywords {
    fn id(&self) -> &str {
        "danger_keywords"
    }

    fn name(&self) -> &str {
        "Danger keywords"
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<String> {
        let found = &input.signals.found_keywords;
        (!found.is_empty())
            .then(|| format!("Critical symptoms detected: {}", found.join(", ")))
    }
}

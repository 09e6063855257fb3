use crate::{Rule, RuleInput};

/// Any checklist entry on the critical-tag list.
pub struct CriticalTags;

impl Rule for CriticalTags {
    fn id(&self) -> &str {
        "critical_tags"
    }

    fn name(&self) -> &str {
        "Critical checklist tags"
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<String> {
        let found = &input.signals.found_critical_tags;
        (!found.is_empty())
            .then(|| format!("Critical checklist items: {}", found.join(", ")))
    }
}

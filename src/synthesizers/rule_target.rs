use serde_json::{Map, Value};
use tracing::debug;

use crate::config::NormalizedConfig;
use crate::framework::{SynthesisError, Synthesizer};
use crate::model::{Reference, Resource, Template};

/// Hard cap on the targets of one event rule.
pub const MAX_RULE_TARGETS: usize = 5;

/// Points the user's event rule at the event's topic.
///
/// The rule itself is not ours: it must already be in the template with a
/// `Properties.Targets` list, and only that list is touched.
pub struct RuleTargetSynthesizer;

/// `{Arn, Id}` for the topic, with `rule_message` fields merged over it.
pub fn rule_target(topic_resource_name: &str, rule_message: &Map<String, Value>) -> Value {
    let mut target = Map::new();
    target.insert("Arn".to_string(), Reference::to(topic_resource_name).into());
    target.insert("Id".to_string(), Value::String(topic_resource_name.to_string()));
    for (key, value) in rule_message {
        target.insert(key.clone(), value.clone());
    }
    Value::Object(target)
}

impl Synthesizer for RuleTargetSynthesizer {
    fn name(&self) -> &'static str {
        "rule-target"
    }

    fn synthesize(&self, template: &mut Template, config: &NormalizedConfig) -> Result<(), SynthesisError> {
        let rule = &config.rule_resource_name;
        let structural = || SynthesisError::Structural { rule: rule.clone() };

        let targets = match template.get_mut(rule) {
            Some(Resource::External(resource)) => resource.targets_mut().ok_or_else(structural)?,
            _ => return Err(structural()),
        };
        if targets.len() >= MAX_RULE_TARGETS {
            return Err(SynthesisError::Capacity {
                rule: rule.clone(),
                limit: MAX_RULE_TARGETS,
            });
        }

        targets.push(rule_target(&config.topic_resource_name, &config.rule_message));
        debug!(%rule, targets = targets.len(), "Rule target appended");
        Ok(())
    }
}

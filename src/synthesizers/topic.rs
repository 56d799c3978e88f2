use serde_json::Map;
use tracing::debug;

use crate::config::NormalizedConfig;
use crate::framework::{SynthesisError, Synthesizer};
use crate::model::{Resource, Template, Topic};
use crate::naming::qualified_name;

/// Creates the event's SNS topic, replacing whatever sat at its logical ID.
pub struct TopicSynthesizer;

impl Synthesizer for TopicSynthesizer {
    fn name(&self) -> &'static str {
        "topic"
    }

    fn synthesize(&self, template: &mut Template, config: &NormalizedConfig) -> Result<(), SynthesisError> {
        let topic = Topic {
            topic_name: qualified_name(&config.prefix, &config.topic_resource_name),
            extra: Map::new(),
        };
        let previous = template.insert(config.topic_resource_name.as_str(), Resource::Topic(topic));
        debug!(
            logical_id = %config.topic_resource_name,
            replaced = previous.is_some(),
            "Topic written"
        );
        Ok(())
    }
}

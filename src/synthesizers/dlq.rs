use serde_json::Map;
use tracing::debug;

use crate::config::NormalizedConfig;
use crate::framework::{SynthesisError, Synthesizer};
use crate::model::{Queue, Resource, Template};
use crate::naming::qualified_name;

/// 14 days, the SQS maximum.
pub const DLQ_MESSAGE_RETENTION_SECONDS: u32 = 1_209_600;

/// Creates the dead-letter queue unless something already holds its logical ID.
///
/// The first event to claim a DLQ name decides its properties. Later events sharing
/// the name only add policy bindings.
pub struct DeadLetterQueueSynthesizer;

impl Synthesizer for DeadLetterQueueSynthesizer {
    fn name(&self) -> &'static str {
        "dlq"
    }

    fn synthesize(&self, template: &mut Template, config: &NormalizedConfig) -> Result<(), SynthesisError> {
        if template.contains(&config.dlq_resource_name) {
            debug!(logical_id = %config.dlq_resource_name, "DLQ already present");
            return Ok(());
        }

        let queue = Queue {
            queue_name: qualified_name(&config.prefix, &config.dlq_resource_name),
            message_retention_period: DLQ_MESSAGE_RETENTION_SECONDS,
            extra: Map::new(),
        };
        template.insert(config.dlq_resource_name.as_str(), Resource::Queue(queue));
        debug!(logical_id = %config.dlq_resource_name, "DLQ created");
        Ok(())
    }
}

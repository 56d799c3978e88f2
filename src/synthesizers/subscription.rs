use serde_json::Map;
use tracing::debug;

use crate::config::NormalizedConfig;
use crate::framework::{SynthesisError, Synthesizer};
use crate::model::{RedrivePolicy, Reference, Resource, Subscription, Template};
use crate::naming::{lambda_function_logical_id, subscription_logical_id};

pub const LAMBDA_PROTOCOL: &str = "lambda";

/// Subscribes the function to the event's topic, with the DLQ as redrive target.
pub struct SubscriptionSynthesizer;

impl Synthesizer for SubscriptionSynthesizer {
    fn name(&self) -> &'static str {
        "subscription"
    }

    fn synthesize(&self, template: &mut Template, config: &NormalizedConfig) -> Result<(), SynthesisError> {
        let logical_id = subscription_logical_id(&config.topic_resource_name);
        let subscription = Subscription {
            topic_arn: Reference::to(config.topic_resource_name.as_str()),
            endpoint: Reference::arn_of(lambda_function_logical_id(&config.func_name)),
            protocol: LAMBDA_PROTOCOL.to_string(),
            redrive_policy: RedrivePolicy {
                dead_letter_target_arn: Reference::arn_of(config.dlq_resource_name.as_str()),
                extra: Map::new(),
            },
            filter_policy: config.filter_policy.clone(),
            extra: Map::new(),
        };
        template.insert(logical_id.as_str(), Resource::Subscription(subscription));
        debug!(%logical_id, "Subscription written");
        Ok(())
    }
}

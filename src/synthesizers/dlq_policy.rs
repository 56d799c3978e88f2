use indexmap::IndexMap;
use serde_json::Map;
use tracing::debug;

use super::{extend_untyped_policy, kind_mismatch};
use crate::config::NormalizedConfig;
use crate::framework::{SynthesisError, Synthesizer};
use crate::model::{
    kind, Effect, OneOrMany, PolicyDocument, Principal, QueuePolicy, Reference, Resource, Statement,
    Template,
};
use crate::naming::qualified_name;

/// Lets SNS move undeliverable messages from the event's topic into the DLQ.
///
/// Mirrors [`TopicPolicySynthesizer`](super::TopicPolicySynthesizer): one `Queues`
/// entry and one statement per event sharing the policy.
pub struct DeadLetterQueuePolicySynthesizer;

/// Allows SNS to send to `dlq_resource_name`, but only on behalf of this topic.
pub fn send_message_statement(dlq_resource_name: &str, topic_resource_name: &str) -> Statement {
    let source = IndexMap::from([("aws:SourceArn".to_string(), Reference::to(topic_resource_name))]);
    Statement::new(
        Effect::Allow,
        Principal::service(OneOrMany::one("sns.amazonaws.com")),
        OneOrMany::one("sqs:SendMessage"),
        Reference::arn_of(dlq_resource_name),
    )
    .with_condition(IndexMap::from([("ArnEquals".to_string(), source)]))
}

impl Synthesizer for DeadLetterQueuePolicySynthesizer {
    fn name(&self) -> &'static str {
        "dlq-policy"
    }

    fn synthesize(&self, template: &mut Template, config: &NormalizedConfig) -> Result<(), SynthesisError> {
        let logical_id = config.dlq_policy_resource_name.as_str();
        let create = || {
            Resource::QueuePolicy(QueuePolicy {
                policy_document: PolicyDocument::new(qualified_name(&config.prefix, logical_id)),
                queues: Vec::new(),
                extra: Map::new(),
            })
        };
        let queue = Reference::to(config.dlq_resource_name.as_str());
        let statement = send_message_statement(&config.dlq_resource_name, &config.topic_resource_name);

        match template.get_or_insert_with(logical_id, create) {
            Resource::QueuePolicy(policy) => {
                policy.queues.push(queue);
                policy.policy_document.statement.push(statement.into());
                debug!(
                    logical_id,
                    dlq = %config.dlq_resource_name,
                    statements = policy.policy_document.statement.len(),
                    "DLQ policy extended"
                );
            }
            Resource::External(policy) if policy.kind == kind::QUEUE_POLICY => {
                extend_untyped_policy(logical_id, policy, "Queues", queue, statement)?;
                debug!(logical_id, dlq = %config.dlq_resource_name, "Untyped DLQ policy extended");
            }
            other => return Err(kind_mismatch(logical_id, kind::QUEUE_POLICY, other)),
        }
        Ok(())
    }
}

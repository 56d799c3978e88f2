use serde_json::Map;
use tracing::debug;

use super::{extend_untyped_policy, kind_mismatch};
use crate::config::{NormalizedConfig, DEFAULT_TOPIC_POLICY_RESOURCE_NAME};
use crate::framework::{SynthesisError, Synthesizer};
use crate::model::{
    kind, Effect, OneOrMany, PolicyDocument, Principal, Reference, Resource, Statement, Template,
    TopicPolicy,
};
use crate::naming::qualified_name;

/// Grants CloudWatch Events permission to publish to the event's topic.
///
/// The policy is shared: each event sharing a policy name adds one `Topics` entry
/// and one statement.
pub struct TopicPolicySynthesizer;

fn empty_policy(prefix: &str) -> Resource {
    // The document ID ignores a custom policy resource name.
    Resource::TopicPolicy(TopicPolicy {
        policy_document: PolicyDocument::new(qualified_name(prefix, DEFAULT_TOPIC_POLICY_RESOURCE_NAME)),
        topics: Vec::new(),
        extra: Map::new(),
    })
}

pub fn publish_statement(topic_resource_name: &str) -> Statement {
    Statement::new(
        Effect::Allow,
        Principal::service(OneOrMany::many(["events.amazonaws.com"])),
        OneOrMany::many(["sns:Publish"]),
        Reference::to(topic_resource_name),
    )
}

impl Synthesizer for TopicPolicySynthesizer {
    fn name(&self) -> &'static str {
        "topic-policy"
    }

    fn synthesize(&self, template: &mut Template, config: &NormalizedConfig) -> Result<(), SynthesisError> {
        let logical_id = config.topic_policy_resource_name.as_str();
        let topic = Reference::to(config.topic_resource_name.as_str());
        let statement = publish_statement(&config.topic_resource_name);

        match template.get_or_insert_with(logical_id, || empty_policy(&config.prefix)) {
            Resource::TopicPolicy(policy) => {
                policy.topics.push(topic);
                policy.policy_document.statement.push(statement.into());
                debug!(
                    logical_id,
                    topic = %config.topic_resource_name,
                    statements = policy.policy_document.statement.len(),
                    "Topic policy extended"
                );
            }
            Resource::External(policy) if policy.kind == kind::TOPIC_POLICY => {
                extend_untyped_policy(logical_id, policy, "Topics", topic, statement)?;
                debug!(logical_id, topic = %config.topic_resource_name, "Untyped topic policy extended");
            }
            other => return Err(kind_mismatch(logical_id, kind::TOPIC_POLICY, other)),
        }
        Ok(())
    }
}

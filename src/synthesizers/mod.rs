//! The seven synthesis steps and the order they run in.
//!
//! Per-event resources (topic, subscription, permission) are created or
//! overwritten at their own logical ID. Shared resources (the DLQ, both policies,
//! the rule's target list) are extended and never replaced.

pub mod dlq;
pub mod dlq_policy;
pub mod permission;
pub mod rule_target;
pub mod subscription;
pub mod topic;
pub mod topic_policy;

pub use dlq::*;
pub use dlq_policy::*;
pub use permission::*;
pub use rule_target::*;
pub use subscription::*;
pub use topic::*;
pub use topic_policy::*;

use crate::framework::{Pipeline, SynthesisError, Synthesizer};
use crate::model::{ExternalResource, Reference, Resource, Statement};

/// Execution order. The topic comes first because every later step references it,
/// and the DLQ precedes its policy and the subscription's redrive policy.
pub const SYNTHESIS_ORDER: &[&dyn Synthesizer] = &[
    &TopicSynthesizer,
    &DeadLetterQueueSynthesizer,
    &TopicPolicySynthesizer,
    &DeadLetterQueuePolicySynthesizer,
    &RuleTargetSynthesizer,
    &SubscriptionSynthesizer,
    &InvokePermissionSynthesizer,
];

/// The pipeline every `cweSns` event goes through.
pub const PIPELINE: Pipeline = Pipeline::new(SYNTHESIS_ORDER);

fn kind_mismatch(logical_id: &str, expected: &str, found: &Resource) -> SynthesisError {
    SynthesisError::KindMismatch {
        logical_id: logical_id.to_string(),
        expected: expected.to_string(),
        found: found.kind().to_string(),
    }
}

/// Extends a shared policy that was loaded untyped, editing its JSON in place.
fn extend_untyped_policy(
    logical_id: &str,
    policy: &mut ExternalResource,
    list_key: &str,
    entry: Reference,
    statement: Statement,
) -> Result<(), SynthesisError> {
    if policy.extend_policy(list_key, entry.into(), statement.into()) {
        Ok(())
    } else {
        Err(SynthesisError::MalformedPolicy {
            logical_id: logical_id.to_string(),
            kind: policy.kind.clone(),
            list_key: list_key.to_string(),
        })
    }
}

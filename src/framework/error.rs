//! # Synthesis Errors
//!
//! One error enum covers every way normalizing or synthesizing an event can fail.
//! All of them are fatal for the build.

use thiserror::Error;

/// Usage text attached to configuration errors.
pub const USAGE: &str = "\
functions:
  processEvent:
    handler: handler.handler
    events:
      - cweSns:
          ruleResourceName: string                              #required
          topicResourceName: string                             #optional
          dlqResourceName: string                               #optional
          dlqPolicyResourceName: string                         #optional
          topicPolicyResourceName: string                       #optional
          ruleMessage: Input || InputPath || InputTransformer   #optional
          filterPolicy: Object                                  #optional
          prefix: string                                        #optional";

/// Errors raised while turning a `cweSns` event into template resources.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SynthesisError {
    /// A required configuration field is missing.
    #[error(
        "When creating a cweSns handler, you must define the rule name.\n\
         In function [{function}]\n\nUsage\n-----\n\n{usage}"
    )]
    Configuration { function: String, usage: String },

    /// The referenced rule is absent or has no `Properties.Targets` list.
    #[error(
        "Invalid resource {rule} for a cwe rule. The resource must be defined and contain Properties and Targets"
    )]
    Structural { rule: String },

    /// The rule already dispatches to the maximum number of targets.
    #[error("Maximum of {limit} targets reached for {rule} rule")]
    Capacity { rule: String, limit: usize },

    /// A shared logical ID is taken by a resource of another kind.
    #[error("Resource {logical_id} ({found}) cannot be extended as a {expected}")]
    KindMismatch {
        logical_id: String,
        expected: String,
        found: String,
    },

    /// A shared policy of the right kind has no `PolicyDocument` object, or one of
    /// its lists is not an array.
    #[error("Policy {logical_id} ({kind}) has no {list_key} and PolicyDocument.Statement lists to extend")]
    MalformedPolicy {
        logical_id: String,
        kind: String,
        list_key: String,
    },
}

impl SynthesisError {
    pub fn configuration(function: impl Into<String>) -> Self {
        SynthesisError::Configuration {
            function: function.into(),
            usage: USAGE.to_string(),
        }
    }
}

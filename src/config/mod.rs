//! Event configuration: the raw `cweSns` block as written by the user, its
//! normalized form, and the service definition it is discovered from.

pub mod error;
pub mod loader;
pub mod service;

pub use error::*;
pub use loader::*;
pub use service::*;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::framework::SynthesisError;
use crate::naming;

pub const DEFAULT_TOPIC_POLICY_RESOURCE_NAME: &str = "CWEtoSNSInsertPolicy";
pub const DEFAULT_DLQ_RESOURCE_NAME: &str = "SNSDeadLetterQueue";
pub const DEFAULT_DLQ_POLICY_RESOURCE_NAME: &str = "SNStoDLQInsertPolicy";

/// The `cweSns` block of a function event, as written by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEventConfig {
    #[serde(default)]
    pub rule_resource_name: Option<String>,
    #[serde(default)]
    pub topic_resource_name: Option<String>,
    #[serde(default)]
    pub dlq_resource_name: Option<String>,
    #[serde(default)]
    pub dlq_policy_resource_name: Option<String>,
    #[serde(default)]
    pub topic_policy_resource_name: Option<String>,
    /// Extra fields merged into the rule target (`Input`, `InputPath`, `InputTransformer`).
    #[serde(default)]
    pub rule_message: Option<Map<String, Value>>,
    #[serde(default)]
    pub filter_policy: Option<Map<String, Value>>,
    #[serde(default)]
    pub prefix: Option<String>,
}

impl RawEventConfig {
    pub fn for_rule(rule_resource_name: impl Into<String>) -> Self {
        Self {
            rule_resource_name: Some(rule_resource_name.into()),
            ..Self::default()
        }
    }
}

/// A fully defaulted event configuration, ready for synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedConfig {
    /// PascalCase function name.
    pub func_name: String,
    pub prefix: String,
    pub rule_resource_name: String,
    pub topic_resource_name: String,
    pub topic_policy_resource_name: String,
    pub dlq_resource_name: String,
    pub dlq_policy_resource_name: String,
    pub rule_message: Map<String, Value>,
    pub filter_policy: Map<String, Value>,
}

/// Empty strings count as unset.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Validates `raw` and applies every default.
///
/// | field                        | default                              |
/// |------------------------------|--------------------------------------|
/// | `prefix`                     | `<service>-<stage>-`                 |
/// | `topic_resource_name`        | `<ruleResourceName>To<FuncName>Topic` |
/// | `topic_policy_resource_name` | `CWEtoSNSInsertPolicy`               |
/// | `dlq_resource_name`          | `SNSDeadLetterQueue`                 |
/// | `dlq_policy_resource_name`   | `SNStoDLQInsertPolicy`               |
/// | `rule_message`               | `{}`                                 |
/// | `filter_policy`              | `{}`                                 |
///
/// # Errors
/// [`SynthesisError::Configuration`] naming `function_name` when `ruleResourceName`
/// is missing or empty.
pub fn normalize(
    function_name: &str,
    stage: &str,
    service_name: &str,
    raw: &RawEventConfig,
) -> Result<NormalizedConfig, SynthesisError> {
    let rule_resource_name =
        non_empty(&raw.rule_resource_name).ok_or_else(|| SynthesisError::configuration(function_name))?;

    let func_name = naming::to_pascal_case(function_name);
    let config = NormalizedConfig {
        prefix: non_empty(&raw.prefix)
            .map(str::to_string)
            .unwrap_or_else(|| naming::default_prefix(service_name, stage)),
        topic_resource_name: non_empty(&raw.topic_resource_name)
            .map(str::to_string)
            .unwrap_or_else(|| naming::derived_topic_name(rule_resource_name, &func_name)),
        topic_policy_resource_name: non_empty(&raw.topic_policy_resource_name)
            .unwrap_or(DEFAULT_TOPIC_POLICY_RESOURCE_NAME)
            .to_string(),
        dlq_resource_name: non_empty(&raw.dlq_resource_name)
            .unwrap_or(DEFAULT_DLQ_RESOURCE_NAME)
            .to_string(),
        dlq_policy_resource_name: non_empty(&raw.dlq_policy_resource_name)
            .unwrap_or(DEFAULT_DLQ_POLICY_RESOURCE_NAME)
            .to_string(),
        rule_message: raw.rule_message.clone().unwrap_or_default(),
        filter_policy: raw.filter_policy.clone().unwrap_or_default(),
        rule_resource_name: rule_resource_name.to_string(),
        func_name,
    };
    debug!(function = function_name, ?config, "Normalized");
    Ok(config)
}

/// Knobs for a synthesis run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SynthesisOptions {
    /// Restore the template when an event fails midway, instead of keeping the
    /// resources its earlier steps already wrote.
    pub atomic: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn applies_every_default() {
        let config = normalize("processEvent", "dev", "orders", &RawEventConfig::for_rule("OrderPlacedRule")).unwrap();

        assert_eq!(config.func_name, "ProcessEvent");
        assert_eq!(config.prefix, "orders-dev-");
        assert_eq!(config.rule_resource_name, "OrderPlacedRule");
        assert_eq!(config.topic_resource_name, "OrderPlacedRuleToProcessEventTopic");
        assert_eq!(config.topic_policy_resource_name, "CWEtoSNSInsertPolicy");
        assert_eq!(config.dlq_resource_name, "SNSDeadLetterQueue");
        assert_eq!(config.dlq_policy_resource_name, "SNStoDLQInsertPolicy");
        assert!(config.rule_message.is_empty());
        assert!(config.filter_policy.is_empty());
    }

    #[test]
    fn explicit_values_win() {
        let raw: RawEventConfig = serde_json::from_value(json!({
            "ruleResourceName": "Rule",
            "topicResourceName": "Custom",
            "dlqResourceName": "Dlq",
            "dlqPolicyResourceName": "DlqPolicy",
            "topicPolicyResourceName": "TopicPolicy",
            "ruleMessage": { "InputPath": "$.detail" },
            "filterPolicy": { "kind": ["a"] },
            "prefix": "p-"
        }))
        .unwrap();
        let config = normalize("fn", "dev", "svc", &raw).unwrap();

        assert_eq!(config.prefix, "p-");
        assert_eq!(config.topic_resource_name, "Custom");
        assert_eq!(config.dlq_resource_name, "Dlq");
        assert_eq!(config.dlq_policy_resource_name, "DlqPolicy");
        assert_eq!(config.topic_policy_resource_name, "TopicPolicy");
        assert_eq!(config.rule_message["InputPath"], json!("$.detail"));
        assert_eq!(config.filter_policy["kind"], json!(["a"]));
    }

    #[test]
    fn empty_strings_fall_back_to_defaults() {
        let raw = RawEventConfig {
            prefix: Some(String::new()),
            topic_resource_name: Some(String::new()),
            ..RawEventConfig::for_rule("Rule")
        };
        let config = normalize("fn", "prod", "svc", &raw).unwrap();
        assert_eq!(config.prefix, "svc-prod-");
        assert_eq!(config.topic_resource_name, "RuleToFnTopic");
    }

    #[test]
    fn missing_rule_names_the_function() {
        let err = normalize("processEvent", "dev", "orders", &RawEventConfig::default()).unwrap_err();
        assert_eq!(err, SynthesisError::configuration("processEvent"));
        assert!(err.to_string().contains("In function [processEvent]"));
        assert!(err.to_string().contains("ruleResourceName"));

        let empty = RawEventConfig::for_rule("");
        assert!(matches!(
            normalize("f", "dev", "orders", &empty),
            Err(SynthesisError::Configuration { .. })
        ));
    }
}

//! Resource nodes of the template graph.
//!
//! The kinds this crate synthesizes are typed; everything else (event rules, the
//! lambda functions themselves, resources from other plugins) passes through as an
//! [`ExternalResource`] and is written back exactly as it was read. So does a known
//! kind whose properties do not fit its typed shape, or that carries resource-level
//! attributes. Typed nodes keep unmodelled keys in their `extra` maps.

use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use super::{PolicyDocument, Reference};

/// CloudFormation `Type` strings for the typed kinds.
pub mod kind {
    pub const TOPIC: &str = "AWS::SNS::Topic";
    pub const QUEUE: &str = "AWS::SQS::Queue";
    pub const TOPIC_POLICY: &str = "AWS::SNS::TopicPolicy";
    pub const QUEUE_POLICY: &str = "AWS::SQS::QueuePolicy";
    pub const SUBSCRIPTION: &str = "AWS::SNS::Subscription";
    pub const PERMISSION: &str = "AWS::Lambda::Permission";
}

/// A single node of the template graph.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawResource")]
pub enum Resource {
    Topic(Topic),
    Queue(Queue),
    TopicPolicy(TopicPolicy),
    QueuePolicy(QueuePolicy),
    Subscription(Subscription),
    Permission(Permission),
    External(ExternalResource),
}

impl Resource {
    /// The CloudFormation `Type` of this resource.
    pub fn kind(&self) -> &str {
        match self {
            Resource::Topic(_) => kind::TOPIC,
            Resource::Queue(_) => kind::QUEUE,
            Resource::TopicPolicy(_) => kind::TOPIC_POLICY,
            Resource::QueuePolicy(_) => kind::QUEUE_POLICY,
            Resource::Subscription(_) => kind::SUBSCRIPTION,
            Resource::Permission(_) => kind::PERMISSION,
            Resource::External(external) => &external.kind,
        }
    }

    /// Builds an untyped resource, e.g. an `AWS::Events::Rule` supplied by the user.
    pub fn external(kind: impl Into<String>, properties: Value) -> Self {
        Resource::External(ExternalResource {
            kind: kind.into(),
            properties: Some(properties),
            attributes: Map::new(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Topic {
    pub topic_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Queue {
    pub queue_name: String,
    pub message_retention_period: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TopicPolicy {
    pub policy_document: PolicyDocument,
    pub topics: Vec<Reference>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueuePolicy {
    pub policy_document: PolicyDocument,
    pub queues: Vec<Reference>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Subscription {
    pub topic_arn: Reference,
    pub endpoint: Reference,
    pub protocol: String,
    pub redrive_policy: RedrivePolicy,
    pub filter_policy: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedrivePolicy {
    #[serde(rename = "deadLetterTargetArn")]
    pub dead_letter_target_arn: Reference,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Permission {
    pub function_name: Reference,
    pub action: String,
    pub principal: String,
    pub source_arn: Reference,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A resource this crate does not own. Kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalResource {
    pub kind: String,
    pub properties: Option<Value>,
    /// Resource-level keys besides `Type` and `Properties` (`DependsOn`, `Condition`, ...).
    pub attributes: Map<String, Value>,
}

impl ExternalResource {
    /// The `Properties.Targets` list of an event rule, if the resource has one.
    pub fn targets(&self) -> Option<&Vec<Value>> {
        self.properties.as_ref()?.get("Targets")?.as_array()
    }

    pub fn targets_mut(&mut self) -> Option<&mut Vec<Value>> {
        self.properties.as_mut()?.get_mut("Targets")?.as_array_mut()
    }

    /// Appends `entry` to `Properties.<list_key>` and `statement` to
    /// `Properties.PolicyDocument.Statement`, creating either list when absent.
    ///
    /// Returns `false` and leaves the node untouched when `Properties` or
    /// `PolicyDocument` is not an object, or an existing list is not an array.
    pub fn extend_policy(&mut self, list_key: &str, entry: Value, statement: Value) -> bool {
        let Some(Value::Object(properties)) = self.properties.as_mut() else {
            return false;
        };
        let list_ok = properties.get(list_key).map_or(true, Value::is_array);
        let statements_ok = match properties.get("PolicyDocument") {
            Some(Value::Object(document)) => document.get("Statement").map_or(true, Value::is_array),
            _ => false,
        };
        if !(list_ok && statements_ok) {
            return false;
        }

        if let Value::Array(list) = properties
            .entry(list_key)
            .or_insert_with(|| Value::Array(Vec::new()))
        {
            list.push(entry);
        }
        if let Some(Value::Object(document)) = properties.get_mut("PolicyDocument") {
            if let Value::Array(statements) = document
                .entry("Statement")
                .or_insert_with(|| Value::Array(Vec::new()))
            {
                statements.push(statement);
            }
        }
        true
    }
}

/// Wire shape of a resource before it is sorted into a typed variant.
#[derive(Deserialize)]
struct RawResource {
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Properties", default)]
    properties: Option<Value>,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

fn typed<T: DeserializeOwned>(properties: &Value, wrap: fn(T) -> Resource) -> Option<Resource> {
    serde_json::from_value(properties.clone()).ok().map(wrap)
}

impl From<RawResource> for Resource {
    fn from(raw: RawResource) -> Self {
        // Attributes have no home on the typed variants, so such nodes stay untyped.
        if raw.attributes.is_empty() {
            if let Some(properties) = &raw.properties {
                let resource = match raw.kind.as_str() {
                    kind::TOPIC => typed(properties, Resource::Topic),
                    kind::QUEUE => typed(properties, Resource::Queue),
                    kind::TOPIC_POLICY => typed(properties, Resource::TopicPolicy),
                    kind::QUEUE_POLICY => typed(properties, Resource::QueuePolicy),
                    kind::SUBSCRIPTION => typed(properties, Resource::Subscription),
                    kind::PERMISSION => typed(properties, Resource::Permission),
                    _ => None,
                };
                if let Some(resource) = resource {
                    return resource;
                }
            }
        }
        Resource::External(ExternalResource {
            kind: raw.kind,
            properties: raw.properties,
            attributes: raw.attributes,
        })
    }
}

impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("Type", self.kind())?;
        match self {
            Resource::Topic(properties) => map.serialize_entry("Properties", properties)?,
            Resource::Queue(properties) => map.serialize_entry("Properties", properties)?,
            Resource::TopicPolicy(properties) => map.serialize_entry("Properties", properties)?,
            Resource::QueuePolicy(properties) => map.serialize_entry("Properties", properties)?,
            Resource::Subscription(properties) => map.serialize_entry("Properties", properties)?,
            Resource::Permission(properties) => map.serialize_entry("Properties", properties)?,
            Resource::External(external) => {
                if let Some(properties) = &external.properties {
                    map.serialize_entry("Properties", properties)?;
                }
                for (key, value) in &external.attributes {
                    map.serialize_entry(key, value)?;
                }
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn known_kinds_are_typed_on_load() {
        let resource: Resource = serde_json::from_value(json!({
            "Type": "AWS::SNS::Topic",
            "Properties": { "TopicName": "svc-dev-MyTopic", "DisplayName": "Mine" }
        }))
        .unwrap();

        match &resource {
            Resource::Topic(topic) => {
                assert_eq!(topic.topic_name, "svc-dev-MyTopic");
                assert_eq!(topic.extra["DisplayName"], json!("Mine"));
            }
            other => panic!("expected a topic, got {:?}", other),
        }
    }

    #[test]
    fn unknown_kinds_and_attributes_round_trip_verbatim() {
        let rule = json!({
            "Type": "AWS::Events::Rule",
            "Properties": { "EventPattern": { "source": ["orders"] }, "Targets": [] },
            "DependsOn": ["Other"]
        });
        let resource: Resource = serde_json::from_value(rule.clone()).unwrap();
        assert!(matches!(resource, Resource::External(_)));
        assert_eq!(serde_json::to_value(&resource).unwrap(), rule);

        let queue_with_condition = json!({
            "Type": "AWS::SQS::Queue",
            "Properties": { "QueueName": "q", "MessageRetentionPeriod": 60 },
            "Condition": "IsProd"
        });
        let resource: Resource = serde_json::from_value(queue_with_condition.clone()).unwrap();
        assert_eq!(resource.kind(), kind::QUEUE);
        assert!(matches!(resource, Resource::External(_)));
        assert_eq!(serde_json::to_value(&resource).unwrap(), queue_with_condition);
    }

    #[test]
    fn extend_policy_creates_missing_lists_and_refuses_bad_shapes() {
        let mut policy = ExternalResource {
            kind: kind::QUEUE_POLICY.to_string(),
            properties: Some(json!({ "PolicyDocument": { "Version": "2012-10-17" } })),
            attributes: Map::new(),
        };
        assert!(policy.extend_policy("Queues", json!({ "Ref": "Q" }), json!({ "Effect": "Allow" })));
        assert_eq!(
            policy.properties,
            Some(json!({
                "PolicyDocument": { "Version": "2012-10-17", "Statement": [{ "Effect": "Allow" }] },
                "Queues": [{ "Ref": "Q" }]
            }))
        );

        let mut single_statement = ExternalResource {
            kind: kind::QUEUE_POLICY.to_string(),
            properties: Some(json!({ "PolicyDocument": { "Statement": { "Effect": "Deny" } }, "Queues": [] })),
            attributes: Map::new(),
        };
        let before = single_statement.clone();
        assert!(!single_statement.extend_policy("Queues", json!("q"), json!({})));
        assert_eq!(single_statement, before);
    }
}

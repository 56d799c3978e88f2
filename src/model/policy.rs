//! IAM-style policy documents attached to topics and queues.
//!
//! Statements this crate writes are typed. Statements already present in a
//! loaded template keep every key they carry: unknown keys land in `extra`, and a
//! statement whose known keys have some other shape (an `AWS` principal, a plain
//! ARN string as `Resource`, ...) is held as [`PolicyStatement::Verbatim`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Reference;

/// Policy language version stamped on every document the synthesizers create.
pub const POLICY_VERSION: &str = "2012-10-17";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub statement: Vec<PolicyStatement>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PolicyDocument {
    /// An empty document with the fixed policy version.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            id: Some(id.into()),
            statement: Vec::new(),
            extra: Map::new(),
        }
    }
}

/// One entry of a document's `Statement` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PolicyStatement {
    Typed(Statement),
    Verbatim(Value),
}

impl From<Statement> for PolicyStatement {
    fn from(statement: Statement) -> Self {
        PolicyStatement::Typed(statement)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Allow,
    Deny,
}

impl Effect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Effect::Allow => "Allow",
            Effect::Deny => "Deny",
        }
    }
}

/// A single policy statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    pub effect: Effect,
    pub principal: Principal,
    pub action: OneOrMany,
    pub resource: Reference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    /// `Sid` and any other key not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Statement {
    pub fn new(effect: Effect, principal: Principal, action: OneOrMany, resource: Reference) -> Self {
        Self {
            effect,
            principal,
            action,
            resource,
            condition: None,
            extra: Map::new(),
        }
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }
}

/// Renders the statement in its wire shape, for policies held as raw JSON.
impl From<Statement> for Value {
    fn from(statement: Statement) -> Self {
        let mut map = Map::new();
        map.insert("Effect".to_string(), Value::from(statement.effect.as_str()));
        map.insert("Principal".to_string(), statement.principal.into());
        map.insert("Action".to_string(), statement.action.into());
        map.insert("Resource".to_string(), statement.resource.into());
        if let Some(condition) = statement.condition {
            let condition = condition
                .into_iter()
                .map(|(operator, keys)| {
                    let keys = keys.into_iter().map(|(key, value)| (key, value.into())).collect();
                    (operator, Value::Object(keys))
                })
                .collect();
            map.insert("Condition".to_string(), Value::Object(condition));
        }
        map.extend(statement.extra);
        Value::Object(map)
    }
}

/// `{ "Service": ... }` principal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    #[serde(rename = "Service")]
    pub service: OneOrMany,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Principal {
    pub fn service(service: OneOrMany) -> Self {
        Self {
            service,
            extra: Map::new(),
        }
    }
}

impl From<Principal> for Value {
    fn from(principal: Principal) -> Self {
        let mut map = Map::new();
        map.insert("Service".to_string(), principal.service.into());
        map.extend(principal.extra);
        Value::Object(map)
    }
}

/// Policy fields that accept either a scalar or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn one(value: impl Into<String>) -> Self {
        OneOrMany::One(value.into())
    }

    pub fn many<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OneOrMany::Many(values.into_iter().map(Into::into).collect())
    }
}

impl From<OneOrMany> for Value {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(one) => Value::String(one),
            OneOrMany::Many(many) => Value::from(many),
        }
    }
}

/// Condition operator -> condition key -> reference, e.g.
/// `{"ArnEquals": {"aws:SourceArn": {"Ref": "MyTopic"}}}`.
pub type Condition = IndexMap<String, IndexMap<String, Reference>>;

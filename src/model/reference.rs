//! Deploy-time placeholders for cross-resource references.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A reference to another resource, resolved by CloudFormation at deploy time.
///
/// Serializes as `{"Ref": "<id>"}` or `{"Fn::GetAtt": ["<id>", "<attribute>"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reference {
    #[serde(rename = "Ref")]
    Ref(String),
    #[serde(rename = "Fn::GetAtt")]
    GetAtt(String, String),
}

impl Reference {
    pub fn to(logical_id: impl Into<String>) -> Self {
        Reference::Ref(logical_id.into())
    }

    /// Shorthand for `Fn::GetAtt [logical_id, Arn]`.
    pub fn arn_of(logical_id: impl Into<String>) -> Self {
        Reference::GetAtt(logical_id.into(), "Arn".to_string())
    }

    /// The logical ID this placeholder points at.
    pub fn logical_id(&self) -> &str {
        match self {
            Reference::Ref(id) | Reference::GetAtt(id, _) => id,
        }
    }
}

impl From<Reference> for Value {
    fn from(reference: Reference) -> Self {
        match reference {
            Reference::Ref(id) => json!({ "Ref": id }),
            Reference::GetAtt(id, attribute) => json!({ "Fn::GetAtt": [id, attribute] }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_in_cloudformation_shape() {
        let value = serde_json::to_value(Reference::arn_of("SNSDeadLetterQueue")).unwrap();
        assert_eq!(value, json!({ "Fn::GetAtt": ["SNSDeadLetterQueue", "Arn"] }));
        assert_eq!(Value::from(Reference::to("MyTopic")), json!({ "Ref": "MyTopic" }));
    }
}

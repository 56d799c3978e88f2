use serde_json::Map;
use tracing::debug;

use crate::config::NormalizedConfig;
use crate::framework::{SynthesisError, Synthesizer};
use crate::model::{Permission, Reference, Resource, Template};
use crate::naming::{lambda_function_logical_id, permission_logical_id};

/// Allows SNS to invoke the function from the event's topic.
pub struct InvokePermissionSynthesizer;

impl Synthesizer for InvokePermissionSynthesizer {
    fn name(&self) -> &'static str {
        "invoke-permission"
    }

    fn synthesize(&self, template: &mut Template, config: &NormalizedConfig) -> Result<(), SynthesisError> {
        let logical_id = permission_logical_id(&config.func_name, &config.topic_resource_name);
        let permission = Permission {
            function_name: Reference::arn_of(lambda_function_logical_id(&config.func_name)),
            action: "lambda:InvokeFunction".to_string(),
            principal: "sns.amazonaws.com".to_string(),
            source_arn: Reference::to(config.topic_resource_name.as_str()),
            extra: Map::new(),
        };
        template.insert(logical_id.as_str(), Resource::Permission(permission));
        debug!(%logical_id, "Invoke permission written");
        Ok(())
    }
}

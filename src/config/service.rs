//! The subset of a serverless service definition needed to discover `cweSns` events.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{LoadError, RawEventConfig};

/// Stage used when neither the command line nor the provider names one.
pub const DEFAULT_STAGE: &str = "dev";

/// A serverless-style service definition.
///
/// Functions keep their declaration order, which fixes the order in which events are
/// synthesized and therefore the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    pub service: String,
    pub provider: Provider,
    #[serde(default)]
    pub functions: IndexMap<String, FunctionDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    #[serde(default)]
    pub stage: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    #[serde(default)]
    pub handler: Option<String>,
    #[serde(default)]
    pub events: Vec<EventDefinition>,
}

/// One entry of a function's `events` list. Only `cweSns` entries matter here;
/// other event types are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDefinition {
    #[serde(rename = "cweSns", default, skip_serializing_if = "Option::is_none")]
    pub cwe_sns: Option<RawEventConfig>,
}

/// Everything needed to synthesize one `cweSns` event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRequest {
    pub function_name: String,
    pub stage: String,
    pub service_name: String,
    pub config: RawEventConfig,
}

impl ServiceDefinition {
    /// Rejects services whose provider is not AWS.
    pub fn validate(&self) -> Result<(), LoadError> {
        if self.provider.name.eq_ignore_ascii_case("aws") {
            Ok(())
        } else {
            Err(LoadError::UnsupportedProvider(self.provider.name.clone()))
        }
    }

    /// The effective stage: the override, then `provider.stage`, then `dev`.
    pub fn stage(&self, stage_override: Option<&str>) -> String {
        stage_override
            .or(self.provider.stage.as_deref())
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_STAGE)
            .to_string()
    }

    /// One request per `cweSns` event, in function then event declaration order.
    pub fn event_requests(&self, stage_override: Option<&str>) -> Vec<EventRequest> {
        let stage = self.stage(stage_override);
        let requests: Vec<EventRequest> = self
            .functions
            .iter()
            .flat_map(|(function_name, function)| {
                function
                    .events
                    .iter()
                    .filter_map(|event| event.cwe_sns.as_ref())
                    .map(|config| EventRequest {
                        function_name: function_name.clone(),
                        stage: stage.clone(),
                        service_name: self.service.clone(),
                        config: config.clone(),
                    })
            })
            .collect();
        debug!(service = %self.service, %stage, events = requests.len(), "Discovered cweSns events");
        requests
    }
}

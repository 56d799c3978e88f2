use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Resource;

/// A CloudFormation template, owned by the caller and mutated in place.
///
/// `Resources` keeps insertion order so that the same input always yields the same
/// output. Overwriting an existing logical ID keeps its original position. Every
/// other top-level section (`AWSTemplateFormatVersion`, `Outputs`, ...) is carried
/// through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    #[serde(flatten)]
    pub sections: Map<String, Value>,
    #[serde(rename = "Resources", default)]
    resources: IndexMap<String, Resource>,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn get(&self, logical_id: &str) -> Option<&Resource> {
        self.resources.get(logical_id)
    }

    pub fn get_mut(&mut self, logical_id: &str) -> Option<&mut Resource> {
        self.resources.get_mut(logical_id)
    }

    pub fn contains(&self, logical_id: &str) -> bool {
        self.resources.contains_key(logical_id)
    }

    /// Creates or overwrites the resource at `logical_id`, returning the previous one.
    pub fn insert(&mut self, logical_id: impl Into<String>, resource: Resource) -> Option<Resource> {
        self.resources.insert(logical_id.into(), resource)
    }

    /// Returns the resource at `logical_id`, creating it with `create` first if absent.
    pub fn get_or_insert_with(
        &mut self,
        logical_id: &str,
        create: impl FnOnce() -> Resource,
    ) -> &mut Resource {
        self.resources
            .entry(logical_id.to_string())
            .or_insert_with(create)
    }

    pub fn resources(&self) -> impl Iterator<Item = (&String, &Resource)> {
        self.resources.iter()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

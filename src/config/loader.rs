//! Reading service definitions and templates from disk, and writing templates back.

use std::path::Path;

use tracing::info;

use super::{LoadError, ServiceDefinition};
use crate::model::Template;

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

async fn read(path: &Path) -> Result<String, LoadError> {
    tokio::fs::read_to_string(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a service definition. `.json` files are read as JSON, anything else as YAML.
pub fn parse_service(path: &Path, content: &str) -> Result<ServiceDefinition, LoadError> {
    let service: ServiceDefinition = if is_json(path) {
        serde_json::from_str(content).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        serde_yaml::from_str(content).map_err(|source| LoadError::Yaml {
            path: path.to_path_buf(),
            source,
        })?
    };
    service.validate()?;
    Ok(service)
}

/// Loads and validates a service definition.
pub async fn load_service(path: &Path) -> Result<ServiceDefinition, LoadError> {
    let content = read(path).await?;
    let service = parse_service(path, &content)?;
    info!(service = %service.service, functions = service.functions.len(), "Loaded service definition");
    Ok(service)
}

/// Loads a compiled CloudFormation template (JSON).
pub async fn load_template(path: &Path) -> Result<Template, LoadError> {
    let content = read(path).await?;
    let template = Template::from_json_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), resources = template.len(), "Loaded template");
    Ok(template)
}

/// Writes `template` as pretty-printed JSON.
pub async fn write_template(path: &Path, template: &Template) -> Result<(), LoadError> {
    let json = template.to_json_pretty().map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tokio::fs::write(path, json).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), resources = template.len(), "Wrote template");
    Ok(())
}

//! Error types for loading service definitions and templates.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur before synthesis starts or after it finishes.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The service definition is not valid YAML for the expected shape.
    #[error("Failed to parse YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A JSON document (service definition or template) could not be parsed or rendered.
    #[error("Failed to process JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The service is not deployed to AWS.
    #[error("This plugin must be used with AWS, found provider '{0}'")]
    UnsupportedProvider(String),
}

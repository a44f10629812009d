use std::io;
use thiserror::Error;
use typlex_config::ConfigError;

/// Everything that can make a `typlex` command fail.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to render YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

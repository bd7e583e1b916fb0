use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActinyxError {
    /// An on-label external trial whose source URLs carry no NCT identifier.
    #[error("No NCT source URL found for trial {nct_id} in source urls: {}", source_urls.join(", "))]
    MissingNctUrl {
        nct_id: String,
        source_urls: Vec<String>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ActinyxError>;

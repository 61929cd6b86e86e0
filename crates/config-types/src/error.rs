use thiserror::Error;

/// Errors that can occur while validating or classifying pod configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A declared source name is outside the closed set of known sources.
    #[error("unknown pod source {source_name:?}")]
    UnknownSource { source_name: String },
    /// A pod carries no provenance annotation.
    #[error("cannot determine config source of pod {uid:?}")]
    SourceUnknown { uid: String },
}

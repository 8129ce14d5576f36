//! Error types for loading construction props.

use std::path::PathBuf;

/// Result type alias for props loading.
pub type Result<T> = std::result::Result<T, PropsError>;

/// Errors that can occur while loading [`MultiCheckProps`](super::MultiCheckProps).
#[derive(Debug, thiserror::Error)]
pub enum PropsError {
    /// The props file could not be read.
    #[error("Failed to read props file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON document is malformed or does not describe props.
    #[error("Invalid JSON props in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// The TOML document is malformed or does not describe props.
    #[error("Invalid TOML props in {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}

impl PropsError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a JSON error.
    pub fn json(origin: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            origin: origin.into(),
            source,
        }
    }

    /// Create a TOML error.
    pub fn toml(origin: impl Into<String>, source: toml::de::Error) -> Self {
        Self::Toml {
            origin: origin.into(),
            source,
        }
    }

    /// The file involved, if the error came from reading one.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            _ => None,
        }
    }
}

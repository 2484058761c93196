use std::path::PathBuf;

use crate::document::DocumentKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse manifest at {path}")]
    ManifestParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to parse environment config at {path}")]
    EnvironmentParse {
        path: PathBuf,
        source: serde_yaml_ng::Error,
    },

    #[error("environment config at {path} cannot be represented as a plain document")]
    EnvironmentConvert {
        path: PathBuf,
        source: serde_json::Error,
    },

    // ── samship.toml ──
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    // ── Document contents ──
    #[error("required field missing from {document}: {path}")]
    MissingField { document: DocumentKind, path: String },

    #[error("invalid field in {document}: {path} must be {expected}")]
    InvalidField {
        document: DocumentKind,
        path: String,
        expected: &'static str,
    },

    #[error("unknown environment '{0}' — expected one of: dev, staging, prod")]
    UnknownEnvironment(String),
}

/// Read a document from disk, separating "does not exist" from other I/O failures.
pub(crate) fn read_document(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

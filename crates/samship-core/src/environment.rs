use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::document::{DocumentKind, lookup};

pub const MEMORY_SIZE_PATH: &str = "resources.lambda.memorySize";
pub const TIMEOUT_SECONDS_PATH: &str = "resources.lambda.timeoutSeconds";

/// Deployment target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub const ALL: [Environment; 3] = [Self::Dev, Self::Staging, Self::Prod];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Staging => "staging",
            Self::Prod => "prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|env| env.as_str() == s)
            .ok_or_else(|| crate::Error::UnknownEnvironment(s.to_owned()))
    }
}

/// Per-environment resource settings, read from `<dir>/<env>.yaml`.
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    document: Value,
}

/// Lambda sizing pulled out of an [`EnvironmentConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LambdaSettings {
    pub memory_size: u64,
    pub timeout_seconds: u64,
}

impl EnvironmentConfig {
    pub fn path_in(environments_dir: &Path, environment: Environment) -> PathBuf {
        environments_dir.join(format!("{environment}.yaml"))
    }

    /// Read and parse the YAML document for `environment`.
    ///
    /// Merge keys (`<<: *anchor`) are resolved before the document is used.
    pub fn load(environments_dir: &Path, environment: Environment) -> crate::Result<Self> {
        let path = Self::path_in(environments_dir, environment);
        tracing::debug!(path = %path.display(), %environment, "loading environment config");

        let content = crate::error::read_document(&path)?;
        let parse_error = |e| crate::Error::EnvironmentParse {
            path: path.clone(),
            source: e,
        };

        let mut yaml: serde_yaml_ng::Value =
            serde_yaml_ng::from_str(&content).map_err(parse_error)?;
        yaml.apply_merge().map_err(parse_error)?;

        let document =
            serde_json::to_value(yaml).map_err(|e| crate::Error::EnvironmentConvert {
                path: path.clone(),
                source: e,
            })?;

        Ok(Self { document })
    }

    pub fn from_value(document: Value) -> Self {
        Self { document }
    }

    /// Memory and timeout for the function.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingField`](crate::Error::MissingField) if either key is absent
    /// - [`Error::InvalidField`](crate::Error::InvalidField) if a value is not a
    ///   non-negative integer
    pub fn lambda_settings(&self) -> crate::Result<LambdaSettings> {
        Ok(LambdaSettings {
            memory_size: self.unsigned(MEMORY_SIZE_PATH)?,
            timeout_seconds: self.unsigned(TIMEOUT_SECONDS_PATH)?,
        })
    }

    fn unsigned(&self, path: &str) -> crate::Result<u64> {
        let value = lookup(&self.document, path).ok_or_else(|| crate::Error::MissingField {
            document: DocumentKind::EnvironmentConfig,
            path: path.to_owned(),
        })?;

        value.as_u64().ok_or_else(|| crate::Error::InvalidField {
            document: DocumentKind::EnvironmentConfig,
            path: path.to_owned(),
            expected: "a non-negative integer",
        })
    }
}

use std::fmt;

use crate::environment::{Environment, EnvironmentConfig};
use crate::manifest::Manifest;

/// Template parameters handed to `sam deploy --parameter-overrides`.
///
/// Built once per run from a validated manifest, the environment config, and
/// the target environment. Keys and their order are fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployParameters {
    pub app_name: String,
    pub app_version: String,
    pub environment: Environment,
    pub runtime_version: String,
    pub handler_function: String,
    pub memory_size: u64,
    pub timeout_seconds: u64,
}

impl DeployParameters {
    pub const KEYS: [&'static str; 7] = [
        "AppName",
        "AppVersion",
        "Environment",
        "RuntimeVersion",
        "HandlerFunction",
        "MemorySize",
        "TimeoutSeconds",
    ];

    /// Project manifest and environment config into deploy parameters.
    ///
    /// # Errors
    ///
    /// [`Error::MissingField`](crate::Error::MissingField) or
    /// [`Error::InvalidField`](crate::Error::InvalidField) when either document
    /// lacks a field the parameters are drawn from.
    pub fn build(
        manifest: &Manifest,
        env_config: &EnvironmentConfig,
        environment: Environment,
    ) -> crate::Result<Self> {
        let lambda = env_config.lambda_settings()?;

        let params = Self {
            app_name: manifest.field("application.name")?,
            app_version: manifest.field("application.version")?,
            environment,
            runtime_version: manifest.field("application.runtime")?,
            handler_function: manifest.field("resources.handler")?,
            memory_size: lambda.memory_size,
            timeout_seconds: lambda.timeout_seconds,
        };

        tracing::debug!(?params, "deploy parameters built");
        Ok(params)
    }

    /// `(key, value)` pairs in [`KEYS`](Self::KEYS) order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let values = [
            self.app_name.clone(),
            self.app_version.clone(),
            self.environment.to_string(),
            self.runtime_version.clone(),
            self.handler_function.clone(),
            self.memory_size.to_string(),
            self.timeout_seconds.to_string(),
        ];
        Self::KEYS.into_iter().zip(values).collect()
    }

    /// One `Key=Value` argument per entry.
    ///
    /// Each pair is passed to the deploy command as its own argument, so
    /// values containing whitespace survive intact.
    pub fn to_overrides(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect()
    }
}

impl fmt::Display for DeployParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  App:         {} v{}", self.app_name, self.app_version)?;
        writeln!(f, "  Environment: {}", self.environment)?;
        writeln!(f, "  Runtime:     {}", self.runtime_version)?;
        writeln!(f, "  Handler:     {}", self.handler_function)?;
        writeln!(f, "  Memory:      {} MB", self.memory_size)?;
        write!(f, "  Timeout:     {} s", self.timeout_seconds)
    }
}

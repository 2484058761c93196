use crate::executor::{RealExecutor, SamExecutor};
use crate::sam::SamError;
use samship_core::{DeployParameters, Environment};
use std::path::{Path, PathBuf};

/// SAM CLI operations client, parameterized over the executor for testability.
pub struct SamClient<E: SamExecutor = RealExecutor> {
    executor: E,
}

impl SamClient<RealExecutor> {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            executor: RealExecutor::new(program),
        }
    }
}

impl Default for SamClient<RealExecutor> {
    fn default() -> Self {
        Self::new("sam")
    }
}

/// Everything `sam deploy` needs for one run.
#[derive(Debug, Clone)]
pub struct DeployRequest<'a> {
    pub environment: Environment,
    pub parameters: &'a DeployParameters,
    /// When `false`, the change set is applied without an interactive prompt.
    pub confirm_changeset: bool,
}

impl<E: SamExecutor> SamClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    // ── Build ──

    /// Run `sam build --template <template>`, returning captured stdout.
    pub async fn build(&self, template: &Path) -> Result<String, BuildError> {
        let cmd = build_args(template)?;
        self.executor
            .exec(&cmd)
            .await
            .map_err(|e| BuildError::Build { source: e })
    }

    // ── Deploy ──

    /// Run `sam deploy`, returning captured stdout.
    pub async fn deploy(&self, request: &DeployRequest<'_>) -> Result<String, DeployError> {
        self.executor
            .exec(&deploy_args(request))
            .await
            .map_err(|e| DeployError::Deploy {
                environment: request.environment,
                source: e,
            })
    }

    // ── Dry run ──

    /// The command lines `build` and `deploy` would run, without running them.
    pub fn plan(
        &self,
        template: &Path,
        request: &DeployRequest<'_>,
    ) -> Result<Vec<String>, BuildError> {
        Ok(vec![
            self.executor.render(&build_args(template)?),
            self.executor.render(&deploy_args(request)),
        ])
    }
}

// ── Arguments ──

/// Arguments for `sam build`.
pub fn build_args(template: &Path) -> Result<Vec<String>, BuildError> {
    let template_str = template
        .to_str()
        .ok_or_else(|| BuildError::InvalidPath(template.to_path_buf()))?;
    Ok(args(["build", "--template", template_str]))
}

/// Arguments for `sam deploy`; each parameter override is its own argument.
pub fn deploy_args(request: &DeployRequest<'_>) -> Vec<String> {
    let mut cmd = args([
        "deploy",
        "--config-env",
        request.environment.as_str(),
        "--parameter-overrides",
    ]);
    cmd.extend(request.parameters.to_overrides());

    if !request.confirm_changeset {
        cmd.push("--no-confirm-changeset".to_owned());
    }

    cmd
}

// ── Helper ──

fn args<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}

// ── Error types ──

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("template path is not valid UTF-8: {0}")]
    InvalidPath(PathBuf),

    #[error("sam build failed")]
    Build { source: SamError },
}

#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error("sam deploy to {environment} failed")]
    Deploy {
        environment: Environment,
        source: SamError,
    },
}

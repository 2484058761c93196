use crate::sam::SamError;

/// Abstraction over SAM CLI execution for testability.
///
/// Production code uses [`RealExecutor`], tests use mockall-generated mocks.
#[allow(async_fn_in_trait)]
pub trait SamExecutor: Send + Sync {
    /// Execute a sam command to completion, capturing stdout and stderr.
    ///
    /// Returns stdout on a zero exit status.
    async fn exec(&self, args: &[String]) -> Result<String, SamError>;

    /// Human-readable command line, for dry runs.
    fn render(&self, args: &[String]) -> String;
}

/// Real SAM CLI executor.
pub struct RealExecutor {
    program: String,
}

impl RealExecutor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for RealExecutor {
    fn default() -> Self {
        Self::new("sam")
    }
}

impl SamExecutor for RealExecutor {
    async fn exec(&self, args: &[String]) -> Result<String, SamError> {
        use std::process::Stdio;

        tracing::debug!(program = %self.program, ?args, "running sam");

        let output = tokio::process::Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| SamError::NotFound {
                program: self.program.clone(),
                source: e,
            })?;

        if output.status.success() {
            String::from_utf8(output.stdout).map_err(|e| SamError::InvalidUtf8 { source: e })
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            tracing::debug!(code = ?output.status.code(), "sam exited with failure");
            Err(SamError::CommandFailed {
                args: args.to_vec(),
                code: output.status.code(),
                stderr,
            })
        }
    }

    fn render(&self, args: &[String]) -> String {
        std::iter::once(self.program.as_str())
            .chain(args.iter().map(String::as_str))
            .map(quote)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Quote an argument for display when it contains whitespace.
fn quote(arg: &str) -> String {
    if arg.is_empty() || arg.contains(char::is_whitespace) {
        format!("'{}'", arg.replace('\'', r"'\''"))
    } else {
        arg.to_owned()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SamError {
    #[error("failed to run '{program}' — is the AWS SAM CLI installed?")]
    NotFound {
        program: String,
        source: std::io::Error,
    },

    #[error("sam command failed ({}): {args:?}\n{stderr}", exit_label(*code))]
    CommandFailed {
        args: Vec<String>,
        code: Option<i32>,
        stderr: String,
    },

    #[error("sam output was not valid UTF-8")]
    InvalidUtf8 { source: std::string::FromUtf8Error },
}

fn exit_label(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_owned(),
    }
}

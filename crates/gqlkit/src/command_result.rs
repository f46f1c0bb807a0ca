use std::process::ExitCode;

/// What a command hands back to `main()` for printing.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }

    /// Reports a successful command that printed nothing.
    pub fn success() -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: None,
        }
    }
}
impl std::convert::From<anyhow::Result<Option<String>>> for CommandResult {
    fn from(result: anyhow::Result<Option<String>>) -> Self {
        match result {
            Ok(Some(stdout)) => Self::stdout(format_args!("{stdout}")),
            Ok(None) => Self::success(),
            Err(err) => Self::stderr(format_args!(
                "{} {err:#}",
                crate::output_utils::RED_X,
            )),
        }
    }
}

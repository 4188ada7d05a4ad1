//! Command execution in the isolated environment

use super::core::VirtualEnv;
use crate::context::BuildContext;
use onefile_errors::{Error, EnvironmentError};
use onefile_events::EventEmitter;
use std::path::Path;
use tokio::process::Command;

/// Captured result of one external tool invocation
///
/// Stdout is not carried; the tools this pipeline drives report
/// everything of diagnostic value on stderr.
#[derive(Clone, Debug)]
pub struct CommandOutput {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stderr: String,
}

/// Spawn a host command outside any environment, wait for it, and capture
/// its output. Used for environment creation itself, before a handle exists.
pub(crate) async fn run_host_command(
    context: &BuildContext,
    program: &Path,
    args: &[&str],
) -> Result<CommandOutput, Error> {
    context.emit_command_started(format!("{} {}", program.display(), args.join(" ")));

    let output = Command::new(program)
        .args(args)
        .current_dir(&context.working_dir)
        .output()
        .await
        .map_err(|e| {
            Error::from(EnvironmentError::CreationFailed {
                path: program.display().to_string(),
                message: e.to_string(),
            })
        })?;

    Ok(capture(&output))
}

impl VirtualEnv {
    /// Execute one of the environment's own tools with the activation
    /// variables applied, waiting synchronously for completion
    ///
    /// # Errors
    ///
    /// Returns an error if the tool cannot be spawned at all. A non-zero
    /// exit is not an error here; callers inspect the [`CommandOutput`] and
    /// raise their own domain error carrying the tool's stderr verbatim.
    pub async fn run_tool(
        &self,
        context: &BuildContext,
        program: &Path,
        args: &[String],
    ) -> Result<CommandOutput, Error> {
        context.emit_command_started(format!("{} {}", program.display(), args.join(" ")));
        context.emit_debug_with_context(
            format!("executing {}", program.display()),
            std::collections::HashMap::from([(
                "working_dir".to_string(),
                context.working_dir.display().to_string(),
            )]),
        );

        let output = Command::new(program)
            .args(args)
            .envs(&self.env_vars)
            .current_dir(&context.working_dir)
            .output()
            .await
            .map_err(|e| {
                Error::from(EnvironmentError::ToolMissing {
                    tool: program
                        .file_name()
                        .map_or_else(|| e.to_string(), |n| n.to_string_lossy().into_owned()),
                    path: program.display().to_string(),
                })
            })?;

        Ok(capture(&output))
    }
}

fn capture(output: &std::process::Output) -> CommandOutput {
    CommandOutput {
        success: output.status.success(),
        exit_code: output.status.code(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

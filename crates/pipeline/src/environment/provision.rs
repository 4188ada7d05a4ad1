//! Environment provisioning
//!
//! Step 1 of the pipeline. The environment is never reused across runs:
//! any tree left at the configured path (by a failed or interrupted run)
//! is deleted before the interpreter creates a fresh one, so stale state
//! cannot leak into a later build.

use super::core::VirtualEnv;
use super::execution::run_host_command;
use crate::context::BuildContext;
use onefile_errors::{EnvironmentError, Error};
use onefile_events::{AppEvent, EnvironmentEvent, EventEmitter};
use std::path::PathBuf;
use tokio::fs;

impl VirtualEnv {
    /// Provision a fresh isolated environment with the pinned interpreter
    ///
    /// # Errors
    ///
    /// Returns an error if the pinned interpreter cannot be found, a stale
    /// environment tree cannot be removed, or environment creation fails.
    pub async fn provision(context: &BuildContext) -> Result<Self, Error> {
        let interpreter = locate_interpreter(context)?;
        let root = context.env_root();

        context.emit(AppEvent::Environment(EnvironmentEvent::Creating {
            interpreter: context.config.environment.interpreter.clone(),
            path: root.clone(),
        }));

        if fs::try_exists(&root).await.unwrap_or(false) {
            fs::remove_dir_all(&root).await.map_err(|e| {
                Error::from(EnvironmentError::RemovalFailed {
                    path: root.display().to_string(),
                    message: e.to_string(),
                })
            })?;
            context.emit(AppEvent::Environment(EnvironmentEvent::StaleRemoved {
                path: root.clone(),
            }));
        }

        let root_arg = root.display().to_string();
        let result = run_host_command(context, &interpreter, &["-m", "venv", &root_arg]).await?;
        if !result.success {
            return Err(EnvironmentError::CreationFailed {
                path: root.display().to_string(),
                message: result.stderr,
            }
            .into());
        }

        let env = Self::new(root);
        context.emit(AppEvent::Environment(EnvironmentEvent::Created {
            path: env.root().to_path_buf(),
        }));
        Ok(env)
    }
}

/// Resolve the pinned interpreter to an absolute path
///
/// An explicitly configured path wins; otherwise the interpreter name is
/// looked up on `PATH`. No fallback or version negotiation is attempted -
/// the exact pinned interpreter is present or the pipeline aborts.
fn locate_interpreter(context: &BuildContext) -> Result<PathBuf, Error> {
    let settings = &context.config.environment;

    if let Some(path) = &settings.interpreter_path {
        let path = context.resolve(path);
        if path.is_file() {
            return Ok(path);
        }
        return Err(EnvironmentError::InterpreterNotFound {
            interpreter: path.display().to_string(),
        }
        .into());
    }

    which::which(&settings.interpreter).map_err(|_| {
        EnvironmentError::InterpreterNotFound {
            interpreter: settings.interpreter.clone(),
        }
        .into()
    })
}

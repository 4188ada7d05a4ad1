//! Isolated environment error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum EnvironmentError {
    #[error("interpreter not found: {interpreter}")]
    InterpreterNotFound { interpreter: String },

    #[error("environment creation failed at {path}: {message}")]
    CreationFailed { path: String, message: String },

    #[error("environment tool missing: {tool} (expected at {path})")]
    ToolMissing { tool: String, path: String },

    #[error("failed to remove stale environment at {path}: {message}")]
    RemovalFailed { path: String, message: String },
}

impl UserFacingError for EnvironmentError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::InterpreterNotFound { .. } => {
                Some("Install the pinned interpreter version and make sure it is on PATH.")
            }
            Self::RemovalFailed { .. } => {
                Some("Delete the environment directory manually, then re-run.")
            }
            _ => None,
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::InterpreterNotFound { .. } => "environment.interpreter_not_found",
            Self::CreationFailed { .. } => "environment.creation_failed",
            Self::ToolMissing { .. } => "environment.tool_missing",
            Self::RemovalFailed { .. } => "environment.removal_failed",
        };
        Some(code)
    }
}

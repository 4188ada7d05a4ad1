//! Packaging step error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum PackagingError {
    #[error("entry point not found: {path}")]
    EntryPointMissing { path: String },

    #[error("embedded binary not found at {path}")]
    EmbeddedBinaryMissing { path: String },

    #[error("packaging tool failed with {code:?}: {stderr}")]
    ToolFailed { code: Option<i32>, stderr: String },

    #[error("expected artifact missing after packaging: {path}")]
    ArtifactMissing { path: String },
}

impl UserFacingError for PackagingError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::EntryPointMissing { .. } => {
                Some("Run from the project root containing the entry point source file.")
            }
            Self::EmbeddedBinaryMissing { .. } => {
                Some("Install the archiver package (p7zip) so the binary exists at its host path.")
            }
            _ => None,
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::EntryPointMissing { .. } => "packaging.entry_point_missing",
            Self::EmbeddedBinaryMissing { .. } => "packaging.embedded_binary_missing",
            Self::ToolFailed { .. } => "packaging.tool_failed",
            Self::ArtifactMissing { .. } => "packaging.artifact_missing",
        };
        Some(code)
    }
}

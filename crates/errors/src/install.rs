//! Dependency installation error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum InstallError {
    #[error("installer exited with {code:?}: {stderr}")]
    InstallerFailed { code: Option<i32>, stderr: String },
}

impl UserFacingError for InstallError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        Some("Check network access and that the declared packages exist for this platform.")
    }

    fn is_retryable(&self) -> bool {
        // Installs mostly fail on transient network problems
        true
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::InstallerFailed { .. } => "install.installer_failed",
        };
        Some(code)
    }
}

//! Domain-driven event types for the bundling pipeline
//!
//! Events are grouped by pipeline phase. The CLI renders the three
//! user-visible phase banners (environment creation, dependency
//! installation, build) from the `*Started` variants.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Top-level event envelope sent across the channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    Environment(EnvironmentEvent),
    Install(InstallEvent),
    Package(PackageEvent),
    General(GeneralEvent),
}

/// Isolated environment lifecycle events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EnvironmentEvent {
    /// Provisioning started for the given environment root
    Creating { interpreter: String, path: PathBuf },
    /// A stale environment tree from an earlier run was removed
    StaleRemoved { path: PathBuf },
    /// Environment is ready for use
    Created { path: PathBuf },
}

/// Dependency installation events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InstallEvent {
    /// Install of the ordered dependency set started
    Started { packages: Vec<String> },
    /// All dependencies installed
    Completed { count: usize },
}

/// Packaging and cleanup events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PackageEvent {
    /// Packaging tool invocation started
    Started { artifact: String },
    /// A single artifact was written to the destination directory
    Completed { artifact: PathBuf, duration: Duration },
    /// A generated build descriptor was removed during cleanup
    DescriptorRemoved { path: PathBuf },
}

/// General-purpose events (debug output, warnings, failures)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GeneralEvent {
    /// Debug log message with optional context
    DebugLog {
        message: String,
        context: std::collections::HashMap<String, String>,
    },
    /// Non-fatal warning
    Warning { message: String },
    /// A command is being executed in the environment
    CommandStarted { command: String },
    /// An operation failed; the pipeline is aborting
    OperationFailed { operation: String, error: String },
}

impl GeneralEvent {
    pub fn debug(message: impl Into<String>) -> Self {
        Self::DebugLog {
            message: message.into(),
            context: std::collections::HashMap::new(),
        }
    }

    pub fn debug_with_context(
        message: impl Into<String>,
        context: std::collections::HashMap<String, String>,
    ) -> Self {
        Self::DebugLog {
            message: message.into(),
            context,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::Warning {
            message: message.into(),
        }
    }
}

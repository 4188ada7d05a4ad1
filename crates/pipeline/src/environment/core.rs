//! Core `VirtualEnv` struct and accessors

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Handle to a provisioned isolated environment
///
/// Activation is data, not process state: the handle carries the environment
/// variables (`VIRTUAL_ENV`, a `PATH` with the environment's `bin/` first)
/// that every subsequent command is spawned with. The tree itself is
/// disposable intermediate state and gets no explicit teardown.
#[derive(Clone, Debug)]
pub struct VirtualEnv {
    /// Environment root directory
    pub(crate) root: PathBuf,
    /// Directory holding the environment's executables
    pub(crate) bin_dir: PathBuf,
    /// Activation environment variables applied to every spawn
    pub(crate) env_vars: HashMap<String, String>,
}

impl VirtualEnv {
    pub(crate) fn new(root: PathBuf) -> Self {
        let bin_dir = root.join("bin");

        let mut env_vars = HashMap::new();
        env_vars.insert("VIRTUAL_ENV".to_string(), root.display().to_string());
        let host_path = std::env::var("PATH").unwrap_or_default();
        env_vars.insert(
            "PATH".to_string(),
            format!("{}:{host_path}", bin_dir.display()),
        );

        Self {
            root,
            bin_dir,
            env_vars,
        }
    }

    /// Environment root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the environment's executables
    #[must_use]
    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    /// Absolute path of a tool inside the environment
    #[must_use]
    pub fn tool(&self, name: &str) -> PathBuf {
        self.bin_dir.join(name)
    }

    /// Activation environment variables
    #[must_use]
    pub fn env_vars(&self) -> &HashMap<String, String> {
        &self.env_vars
    }
}

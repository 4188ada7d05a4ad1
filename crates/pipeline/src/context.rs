//! Build context shared across pipeline steps

use onefile_config::Config;
use onefile_events::{EventEmitter, EventSender};
use std::path::{Path, PathBuf};

/// Build context carried through every pipeline step
#[derive(Clone, Debug)]
pub struct BuildContext {
    /// Pipeline configuration
    pub config: Config,
    /// Working directory the pipeline runs in
    pub working_dir: PathBuf,
    /// Event sender for progress reporting
    pub event_sender: Option<EventSender>,
}

impl EventEmitter for BuildContext {
    fn event_sender(&self) -> Option<&EventSender> {
        self.event_sender.as_ref()
    }
}

impl BuildContext {
    /// Create new build context
    #[must_use]
    pub fn new(config: Config, working_dir: PathBuf) -> Self {
        Self {
            config,
            working_dir,
            event_sender: None,
        }
    }

    /// Set event sender
    #[must_use]
    pub fn with_event_sender(mut self, event_sender: EventSender) -> Self {
        self.event_sender = Some(event_sender);
        self
    }

    /// Environment root, resolved against the working directory
    #[must_use]
    pub fn env_root(&self) -> PathBuf {
        self.working_dir.join(&self.config.environment.path)
    }

    /// Full path the finished artifact is expected at
    #[must_use]
    pub fn artifact_path(&self) -> PathBuf {
        self.working_dir
            .join(&self.config.packaging.dist_dir)
            .join(&self.config.packaging.artifact_name)
    }

    /// Entry point path, resolved against the working directory
    #[must_use]
    pub fn entry_point(&self) -> PathBuf {
        self.working_dir.join(&self.config.packaging.entry_point)
    }

    /// Resolve a configured path against the working directory
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }
}

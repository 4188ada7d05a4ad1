//! Fixed names and paths for the bundling pipeline
//!
//! These literals define the default, reproducible pipeline: they are the
//! values a bare `onefile` invocation uses. A local `onefile.toml` may
//! override the paths for development, but the shipped build uses exactly
//! these.

/// Pinned interpreter the environment is created with
pub const INTERPRETER: &str = "python3.11";

/// Environment directory, relative to the working directory
pub const ENV_DIR: &str = "venv";

/// Ordered dependency set installed into the environment.
/// Install order is insertion order; the packaging tool comes last.
pub const DEPENDENCIES: &[&str] = &["PySide6", "requests", "pyinstaller"];

/// Packaging tool binary inside the environment
pub const PACKAGER: &str = "pyinstaller";

/// Artifact name with the embedded release version string
pub const ARTIFACT_NAME: &str = "ProjectPlus-Updater-v3.4";

/// Entry point source file consumed by the packager
pub const ENTRY_POINT: &str = "main.py";

/// Host path of the archiver binary embedded into the bundle
pub const EMBED_SOURCE: &str = "/usr/bin/7z";

/// Internal bundle path the archiver is embedded at
pub const EMBED_DEST: &str = "bin";

/// Destination directory for the finished artifact
pub const DIST_DIR: &str = "dist";

/// Scratch directory for the packager's intermediate files
pub const WORK_DIR: &str = "build";

/// Glob matching generated build descriptor files removed during cleanup
pub const DESCRIPTOR_GLOB: &str = "*.spec";

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "onefile.toml";

/// Directory for debug log files
pub const LOGS_DIR: &str = "logs";

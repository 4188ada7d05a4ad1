#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for onefile
//!
//! The defaults hard-code the fixed, reproducible pipeline configuration.
//! A `onefile.toml` in the working directory may override paths for
//! development; the shipped invocation surface stays a no-argument command.

pub mod constants;

use onefile_errors::{ConfigError, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub environment: EnvironmentConfig,

    #[serde(default = "default_dependencies")]
    pub dependencies: Vec<String>,

    #[serde(default)]
    pub packaging: PackagingConfig,
}

/// Isolated environment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Interpreter binary name looked up on PATH
    #[serde(default = "default_interpreter")]
    pub interpreter: String,
    /// Explicit interpreter path; skips PATH lookup when set
    #[serde(default)]
    pub interpreter_path: Option<PathBuf>,
    /// Environment root, relative to the working directory
    #[serde(default = "default_env_dir")]
    pub path: PathBuf,
}

/// Packaging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackagingConfig {
    /// Artifact name, carries the embedded version string
    #[serde(default = "default_artifact_name")]
    pub artifact_name: String,
    /// Entry point source file handed to the packager
    #[serde(default = "default_entry_point")]
    pub entry_point: PathBuf,
    /// Host path of the binary embedded into the bundle
    #[serde(default = "default_embed_source")]
    pub embed_source: PathBuf,
    /// Internal bundle path the binary lands at
    #[serde(default = "default_embed_dest")]
    pub embed_dest: String,
    /// Destination directory for the finished artifact
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
    /// Scratch directory for intermediate build files
    #[serde(default = "default_work_dir")]
    pub work_dir: PathBuf,
    /// Glob matching generated descriptor files removed during cleanup
    #[serde(default = "default_descriptor_glob")]
    pub descriptor_glob: String,
}

// The serde `default = ...` attributes only apply during deserialization;
// the fixed dependency set has to be spelled out here as well so a run
// without any `onefile.toml` gets the same configuration a parsed empty
// file would.
impl Default for Config {
    fn default() -> Self {
        Self {
            environment: EnvironmentConfig::default(),
            dependencies: default_dependencies(),
            packaging: PackagingConfig::default(),
        }
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            interpreter_path: None,
            path: default_env_dir(),
        }
    }
}

impl Default for PackagingConfig {
    fn default() -> Self {
        Self {
            artifact_name: default_artifact_name(),
            entry_point: default_entry_point(),
            embed_source: default_embed_source(),
            embed_dest: default_embed_dest(),
            dist_dir: default_dist_dir(),
            work_dir: default_work_dir(),
            descriptor_glob: default_descriptor_glob(),
        }
    }
}

// Default value functions for serde

fn default_interpreter() -> String {
    constants::INTERPRETER.to_string()
}

fn default_env_dir() -> PathBuf {
    PathBuf::from(constants::ENV_DIR)
}

fn default_dependencies() -> Vec<String> {
    constants::DEPENDENCIES
        .iter()
        .map(|d| (*d).to_string())
        .collect()
}

fn default_artifact_name() -> String {
    constants::ARTIFACT_NAME.to_string()
}

fn default_entry_point() -> PathBuf {
    PathBuf::from(constants::ENTRY_POINT)
}

fn default_embed_source() -> PathBuf {
    PathBuf::from(constants::EMBED_SOURCE)
}

fn default_embed_dest() -> String {
    constants::EMBED_DEST.to_string()
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from(constants::DIST_DIR)
}

fn default_work_dir() -> PathBuf {
    PathBuf::from(constants::WORK_DIR)
}

fn default_descriptor_glob() -> String {
    constants::DESCRIPTOR_GLOB.to_string()
}

impl Config {
    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the file contents
    /// contain invalid TOML syntax that cannot be parsed.
    pub async fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|_| ConfigError::NotFound {
                path: path.display().to_string(),
            })?;

        toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })
            .map_err(Into::into)
    }

    /// Load `onefile.toml` from the working directory, or fall back to the
    /// fixed defaults when no file exists
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or contains invalid TOML syntax.
    pub async fn load_or_default() -> Result<Self, Error> {
        let config_path = Path::new(constants::CONFIG_FILE);

        if config_path.exists() {
            tracing::debug!("loading configuration from {}", config_path.display());
            Self::load_from_file(config_path).await
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the loaded configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot drive a sound pipeline run, e.g.
    /// an empty dependency set or identical dist and work directories.
    pub fn validate(&self) -> Result<(), Error> {
        if self.dependencies.is_empty() {
            return Err(ConfigError::Invalid {
                message: "dependency set must not be empty".to_string(),
            }
            .into());
        }
        if self.packaging.dist_dir == self.packaging.work_dir {
            return Err(ConfigError::InvalidValue {
                field: "packaging.work_dir".to_string(),
                value: self.packaging.work_dir.display().to_string(),
            }
            .into());
        }
        Ok(())
    }
}

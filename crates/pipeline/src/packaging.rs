//! Packaging invocation
//!
//! Step 4 of the pipeline: invoke the environment's packaging tool with the
//! fixed argument set to produce one windowed single-file artifact with the
//! archiver binary embedded. Preconditions (entry point present, embed
//! source present) are checked before the tool is spawned so their absence
//! fails with a precise domain error instead of a tool backtrace.

use crate::context::BuildContext;
use crate::environment::VirtualEnv;
use onefile_config::{constants, PackagingConfig};
use onefile_errors::{EnvironmentError, Error, PackagingError};
use onefile_events::{AppEvent, EventEmitter, PackageEvent};
use std::path::PathBuf;

/// Assemble the packager's fixed argument set
///
/// Single-file output, no console window (the target is a GUI-only
/// program), versioned artifact name, one embedded binary, distinct
/// destination and scratch directories, entry point last.
#[must_use]
pub fn packager_args(packaging: &PackagingConfig) -> Vec<String> {
    vec![
        "--onefile".to_string(),
        "--noconsole".to_string(),
        "--name".to_string(),
        packaging.artifact_name.clone(),
        "--add-binary".to_string(),
        format!(
            "{}:{}",
            packaging.embed_source.display(),
            packaging.embed_dest
        ),
        "--distpath".to_string(),
        packaging.dist_dir.display().to_string(),
        "--workpath".to_string(),
        packaging.work_dir.display().to_string(),
        packaging.entry_point.display().to_string(),
    ]
}

/// Run the packaging step, returning the verified artifact path
///
/// # Errors
///
/// Returns an error if the entry point or embed source is missing, the
/// packaging tool is absent from the environment or exits non-zero, or no
/// artifact exists at the expected destination afterwards.
pub(crate) async fn run(context: &BuildContext, env: &VirtualEnv) -> Result<PathBuf, Error> {
    let packaging = &context.config.packaging;

    let entry_point = context.entry_point();
    if !entry_point.is_file() {
        return Err(PackagingError::EntryPointMissing {
            path: entry_point.display().to_string(),
        }
        .into());
    }

    let embed_source = context.resolve(&packaging.embed_source);
    if !embed_source.is_file() {
        return Err(PackagingError::EmbeddedBinaryMissing {
            path: embed_source.display().to_string(),
        }
        .into());
    }

    context.emit(AppEvent::Package(PackageEvent::Started {
        artifact: packaging.artifact_name.clone(),
    }));

    let packager = env.tool(constants::PACKAGER);
    if !packager.is_file() {
        return Err(EnvironmentError::ToolMissing {
            tool: constants::PACKAGER.to_string(),
            path: packager.display().to_string(),
        }
        .into());
    }

    let args = packager_args(packaging);
    let result = env.run_tool(context, &packager, &args).await?;
    if !result.success {
        return Err(PackagingError::ToolFailed {
            code: result.exit_code,
            stderr: result.stderr,
        }
        .into());
    }

    let artifact = context.artifact_path();
    if !artifact.is_file() {
        return Err(PackagingError::ArtifactMissing {
            path: artifact.display().to_string(),
        }
        .into());
    }

    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_set_is_exact_and_ordered() {
        let packaging = PackagingConfig::default();
        let args = packager_args(&packaging);
        assert_eq!(
            args,
            vec![
                "--onefile",
                "--noconsole",
                "--name",
                "ProjectPlus-Updater-v3.4",
                "--add-binary",
                "/usr/bin/7z:bin",
                "--distpath",
                "dist",
                "--workpath",
                "build",
                "main.py",
            ]
        );
    }

    #[test]
    fn entry_point_comes_last() {
        let packaging = PackagingConfig::default();
        let args = packager_args(&packaging);
        assert_eq!(args.last().map(String::as_str), Some("main.py"));
    }
}

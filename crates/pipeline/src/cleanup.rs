//! Descriptor cleanup
//!
//! Step 5 of the pipeline: delete every generated build descriptor in the
//! working directory matching the configured glob. Runs only after a
//! successful packaging step; under the fail-fast policy an earlier error
//! skips cleanup entirely and a later run removes the leftovers.

use crate::context::BuildContext;
use globset::Glob;
use onefile_errors::{ConfigError, Error};
use onefile_events::{AppEvent, EventEmitter, PackageEvent};
use tokio::fs;

/// Remove generated build descriptor files, returning how many were deleted
///
/// # Errors
///
/// Returns an error if the glob is invalid, the working directory cannot be
/// read, or a matching file cannot be removed.
pub(crate) async fn remove_descriptors(context: &BuildContext) -> Result<usize, Error> {
    let pattern = &context.config.packaging.descriptor_glob;
    let matcher = Glob::new(pattern)
        .map_err(|e| {
            Error::from(ConfigError::InvalidValue {
                field: "packaging.descriptor_glob".to_string(),
                value: format!("{pattern}: {e}"),
            })
        })?
        .compile_matcher();

    let mut removed = 0;
    let mut entries = fs::read_dir(&context.working_dir)
        .await
        .map_err(|e| Error::io_with_path(&e, &context.working_dir))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::io_with_path(&e, &context.working_dir))?
    {
        let path = entry.path();
        if !path.is_file() || !matcher.is_match(entry.file_name()) {
            continue;
        }
        fs::remove_file(&path)
            .await
            .map_err(|e| Error::io_with_path(&e, &path))?;
        context.emit(AppEvent::Package(PackageEvent::DescriptorRemoved {
            path: path.clone(),
        }));
        removed += 1;
    }

    Ok(removed)
}

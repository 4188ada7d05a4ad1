//! High-level pipeline orchestration

use crate::cleanup;
use crate::context::BuildContext;
use crate::environment::VirtualEnv;
use crate::packaging;
use onefile_errors::Error;
use onefile_events::{AppEvent, EventEmitter, PackageEvent};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Result of a completed pipeline run
#[derive(Clone, Debug)]
pub struct BuildReport {
    /// Path of the single produced artifact
    pub artifact: PathBuf,
    /// Wall-clock duration of the whole run
    pub duration: Duration,
    /// Number of build descriptors removed during cleanup
    pub removed_descriptors: usize,
}

/// The five-step build pipeline
#[derive(Clone, Debug)]
pub struct Pipeline {
    context: BuildContext,
}

impl Pipeline {
    /// Create a pipeline over the given context
    #[must_use]
    pub fn new(context: BuildContext) -> Self {
        Self { context }
    }

    /// Run all five steps in strict sequence
    ///
    /// The first failing step aborts the run with its error; later steps do
    /// not execute and nothing already done is rolled back. Partial state
    /// (a half-created environment, a populated scratch directory) stays on
    /// disk and is recreated from scratch by the next run.
    ///
    /// # Errors
    ///
    /// Returns the first step error encountered, unchanged.
    pub async fn run(&self) -> Result<BuildReport, Error> {
        match self.execute().await {
            Ok(report) => Ok(report),
            Err(error) => {
                self.context
                    .emit_operation_failed("build", error.to_string());
                Err(error)
            }
        }
    }

    async fn execute(&self) -> Result<BuildReport, Error> {
        let started = Instant::now();
        let context = &self.context;

        context.config.validate()?;

        // Steps 1 + 2: provision and hold the activation in the handle
        let env = VirtualEnv::provision(context).await?;
        tracing::debug!("environment provisioned at {}", env.root().display());

        // Step 3: ordered dependency install
        env.install_dependencies(context).await?;

        // Step 4: single-file packaging
        let artifact = packaging::run(context, &env).await?;

        // Step 5: unconditional descriptor cleanup
        let removed_descriptors = cleanup::remove_descriptors(context).await?;
        tracing::debug!("removed {removed_descriptors} build descriptors");

        let duration = started.elapsed();
        context.emit(AppEvent::Package(PackageEvent::Completed {
            artifact: artifact.clone(),
            duration,
        }));

        Ok(BuildReport {
            artifact,
            duration,
            removed_descriptors,
        })
    }
}

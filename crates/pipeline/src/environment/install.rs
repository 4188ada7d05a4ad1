//! Dependency installation into the isolated environment

use super::core::VirtualEnv;
use crate::context::BuildContext;
use onefile_errors::{EnvironmentError, Error, InstallError};
use onefile_events::{AppEvent, EventEmitter, InstallEvent};

impl VirtualEnv {
    /// Install the ordered dependency set with the environment's own `pip`
    ///
    /// One installer invocation carries all names so install order is
    /// insertion order. No retry policy: the first failure aborts the
    /// pipeline with the installer's stderr attached.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment has no `pip` or the install
    /// exits non-zero.
    pub async fn install_dependencies(&self, context: &BuildContext) -> Result<(), Error> {
        let packages = context.config.dependencies.clone();
        context.emit(AppEvent::Install(InstallEvent::Started {
            packages: packages.clone(),
        }));

        let pip = self.tool("pip");
        if !pip.is_file() {
            return Err(EnvironmentError::ToolMissing {
                tool: "pip".to_string(),
                path: pip.display().to_string(),
            }
            .into());
        }

        let mut args = vec!["install".to_string()];
        args.extend(packages.iter().cloned());

        let result = self.run_tool(context, &pip, &args).await?;
        if !result.success {
            return Err(InstallError::InstallerFailed {
                code: result.exit_code,
                stderr: result.stderr,
            }
            .into());
        }

        context.emit(AppEvent::Install(InstallEvent::Completed {
            count: packages.len(),
        }));
        Ok(())
    }
}

//! Event handling and progress display

use console::style;
use onefile_events::{AppEvent, EnvironmentEvent, GeneralEvent, InstallEvent, PackageEvent};

/// Event handler rendering pipeline progress to the terminal
pub struct EventHandler {
    colors_enabled: bool,
    debug_enabled: bool,
}

impl EventHandler {
    /// Create new event handler
    pub fn new(colors_enabled: bool, debug_enabled: bool) -> Self {
        Self {
            colors_enabled,
            debug_enabled,
        }
    }

    /// Handle incoming event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Environment(event) => self.handle_environment(event),
            AppEvent::Install(event) => self.handle_install(event),
            AppEvent::Package(event) => self.handle_package(event),
            AppEvent::General(event) => self.handle_general(event),
        }
    }

    fn handle_environment(&self, event: EnvironmentEvent) {
        match event {
            EnvironmentEvent::Creating { interpreter, path } => {
                self.banner(&format!(
                    "Creating build environment ({interpreter}) at {}",
                    path.display()
                ));
            }
            EnvironmentEvent::StaleRemoved { path } => {
                self.debug(&format!("removed stale environment at {}", path.display()));
            }
            EnvironmentEvent::Created { path } => {
                self.debug(&format!("environment ready at {}", path.display()));
            }
        }
    }

    fn handle_install(&self, event: InstallEvent) {
        match event {
            InstallEvent::Started { packages } => {
                self.banner(&format!("Installing dependencies: {}", packages.join(", ")));
            }
            InstallEvent::Completed { count } => {
                self.debug(&format!("installed {count} packages"));
            }
        }
    }

    fn handle_package(&self, event: PackageEvent) {
        match event {
            PackageEvent::Started { artifact } => {
                self.banner(&format!("Building {artifact}"));
            }
            PackageEvent::Completed { artifact, duration } => {
                let message = format!(
                    "Built {} in {:.1}s",
                    artifact.display(),
                    duration.as_secs_f64()
                );
                if self.colors_enabled {
                    println!("{}", style(message).green());
                } else {
                    println!("{message}");
                }
            }
            PackageEvent::DescriptorRemoved { path } => {
                self.debug(&format!("removed descriptor {}", path.display()));
            }
        }
    }

    fn handle_general(&self, event: GeneralEvent) {
        match event {
            GeneralEvent::DebugLog { message, .. } => self.debug(&message),
            GeneralEvent::CommandStarted { command } => self.debug(&format!("$ {command}")),
            GeneralEvent::Warning { message } => {
                if self.colors_enabled {
                    eprintln!("{} {message}", style("warning:").yellow().bold());
                } else {
                    eprintln!("warning: {message}");
                }
            }
            GeneralEvent::OperationFailed { operation, error } => {
                if self.colors_enabled {
                    eprintln!("{} {operation}: {error}", style("error:").red().bold());
                } else {
                    eprintln!("error: {operation}: {error}");
                }
            }
        }
    }

    fn banner(&self, message: &str) {
        if self.colors_enabled {
            println!("{} {message}", style("==>").cyan().bold());
        } else {
            println!("==> {message}");
        }
    }

    fn debug(&self, message: &str) {
        if self.debug_enabled {
            eprintln!("  {message}");
        }
    }
}

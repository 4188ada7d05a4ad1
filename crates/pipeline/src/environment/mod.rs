//! Isolated environment handle and its lifecycle
//!
//! The environment is the scoped-resource at the heart of the pipeline:
//! provisioning produces an explicit [`VirtualEnv`] handle, and every later
//! step spawns the environment's own binaries with the handle's activation
//! variables instead of mutating ambient process state.

mod core;
mod execution;
mod install;
mod provision;

pub use self::core::VirtualEnv;
pub use self::execution::CommandOutput;

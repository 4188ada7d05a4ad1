#![deny(clippy::pedantic, unsafe_code)]
//! The onefile build pipeline
//!
//! This crate turns a source tree plus a fixed dependency declaration into
//! one distributable single-file executable. Five fallible steps run in
//! strict sequence: environment provisioning, activation (carried by an
//! explicit [`VirtualEnv`] handle rather than ambient process state),
//! dependency installation, packaging, and descriptor cleanup. The first
//! error aborts the whole run; nothing is retried and nothing is rolled
//! back.

mod cleanup;
mod context;
mod environment;
mod packaging;
mod pipeline;

pub use context::BuildContext;
pub use environment::{CommandOutput, VirtualEnv};
pub use packaging::packager_args;
pub use pipeline::{BuildReport, Pipeline};

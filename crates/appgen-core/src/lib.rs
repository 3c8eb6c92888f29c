//! Appgen Core - Shared library for framework app generators
//!
//! This library provides the orchestration pipeline for scaffolding a
//! ready-to-build app workspace: resolving configuration from flags or
//! interactive prompts, writing the fixed set of project artifacts, and
//! driving the package manager, build, and dev-server handoff. It is
//! designed to be used by product binaries (e.g. `nucleon-app`) that bind
//! it to a concrete framework convention.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Capabilities** - `Prompter` (interactive input) and
//!   `CommandRunner` (child processes), swappable with deterministic fakes
//! - **Layer 2: Core Operations** - configuration resolution, the ordered
//!   artifact generator set, environment diagnostics
//! - **Layer 3: Orchestration** - `pipeline::run` and the `FrameworkConfig`
//!   trait implemented by each product binary
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt implementation
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use appgen_core::{pipeline, CreateArgs, FrameworkConfig};
//!
//! // Define your framework config
//! #[derive(Clone)]
//! struct MyFramework;
//! impl FrameworkConfig for MyFramework {
//!     fn name(&self) -> &'static str { "myfw" }
//!     // ... implement other methods
//! }
//!
//! // Drive the pipeline with your own prompter and runner
//! let ctx = pipeline::RunContext::new(pipeline::InterruptFlag::new());
//! let outcome = pipeline::run(&MyFramework, &CreateArgs::default(), &prompter, &runner, &ctx)?;
//! ```

pub mod config;
pub mod error;
pub mod generate;
pub mod info;
pub mod pipeline;
pub mod process;
pub mod product;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types for convenience
pub use config::{CreateArgs, MainThreadAddon, Prompter, ScaffoldConfig, Theme};
pub use error::ScaffoldError;
pub use pipeline::{run, InterruptFlag, Outcome, RunContext};
pub use process::{CommandRunner, SystemRunner};
pub use product::FrameworkConfig;

#[cfg(feature = "tui")]
pub use tui::CliclackPrompter;

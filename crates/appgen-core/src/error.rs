//! Fatal error kinds for the scaffold pipeline
//!
//! Every kind here aborts the whole run. A user interrupt is deliberately
//! not an error - it is reported as `pipeline::Outcome::Interrupted`.

use crate::process::ExitStatus;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Interactive input was unavailable or incomplete. The pipeline never
    /// falls back to a partially resolved configuration.
    #[error("could not resolve configuration: {0}")]
    ConfigurationUnresolved(String),

    /// The target app directory could not be created.
    #[error("failed to create directory {path}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A generator failed to write its artifact.
    #[error("failed to generate {artifact}")]
    Generator {
        artifact: &'static str,
        #[source]
        source: io::Error,
    },

    /// A child process could not be launched at all.
    #[error("failed to launch '{program}' for the {step} step")]
    ProcessSpawn {
        step: &'static str,
        program: String,
        #[source]
        source: io::Error,
    },

    /// A child process ran but reported failure.
    #[error("{step} step failed with {status}")]
    ProcessExit {
        step: &'static str,
        status: ExitStatus,
    },
}

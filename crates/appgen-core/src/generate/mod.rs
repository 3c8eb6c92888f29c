//! The file generator set
//!
//! A fixed, ordered collection of independent generators. Each one is a
//! function of the configuration subset it owns plus the destination tree,
//! writes exactly one artifact, and is byte-deterministic for a given
//! record. The order lives in `GENERATORS` and is consumed by a single loop
//! so the sequence is data, not implicit call order.

pub mod app_entry;
pub mod app_markup;
pub mod docs;
pub mod gitignore;
pub mod main_view;
pub mod package_manifest;
pub mod registry;
pub mod workspace_entry;

use crate::config::ScaffoldConfig;
use crate::error::ScaffoldError;
use crate::product::FrameworkConfig;
use std::io;

/// One artifact of the scaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    AppEntry,
    AppMarkup,
    MainView,
    WorkspaceEntry,
    Gitignore,
    Registry,
    PackageManifest,
}

impl Artifact {
    /// Artifact tag used in failure reports
    pub fn name(&self) -> &'static str {
        match self {
            Artifact::AppEntry => "app.mjs",
            Artifact::AppMarkup => "app index.html",
            Artifact::MainView => "MainView.mjs",
            Artifact::WorkspaceEntry => "workspace index.html",
            Artifact::Gitignore => ".gitignore",
            Artifact::Registry => "apps.json",
            Artifact::PackageManifest => "package.json",
        }
    }
}

/// The generator sequence. Generators do not read each other's output, so
/// the order only has to stay fixed, not meaningful.
pub const GENERATORS: &[Artifact] = &[
    Artifact::AppEntry,
    Artifact::AppMarkup,
    Artifact::MainView,
    Artifact::WorkspaceEntry,
    Artifact::Gitignore,
    Artifact::Registry,
    Artifact::PackageManifest,
];

/// Run every generator in order. The destination directory must already
/// exist. Any failure aborts the set.
pub fn write_all<C: FrameworkConfig>(
    framework: &C,
    config: &ScaffoldConfig,
) -> Result<(), ScaffoldError> {
    for artifact in GENERATORS {
        write_artifact(*artifact, framework, config).map_err(|source| {
            ScaffoldError::Generator {
                artifact: artifact.name(),
                source,
            }
        })?;
    }
    Ok(())
}

fn write_artifact<C: FrameworkConfig>(
    artifact: Artifact,
    framework: &C,
    config: &ScaffoldConfig,
) -> io::Result<()> {
    match artifact {
        Artifact::AppEntry => app_entry::write(framework, config),
        Artifact::AppMarkup => app_markup::write(framework, config),
        Artifact::MainView => main_view::write(framework, config),
        Artifact::WorkspaceEntry => workspace_entry::write(framework, config),
        Artifact::Gitignore => gitignore::write(config),
        Artifact::Registry => registry::write(config),
        Artifact::PackageManifest => package_manifest::write(framework, config),
    }
}

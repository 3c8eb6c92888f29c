//! Docs app copy step
//!
//! Runs between install and build: copies the docs app shipped inside the
//! installed framework package into the workspace. Skipped when the package
//! ships no docs tree.

use crate::product::FrameworkConfig;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

pub fn copy_docs_app<C: FrameworkConfig>(framework: &C, workspace: &Path) -> io::Result<()> {
    let source = workspace
        .join("node_modules")
        .join(framework.npm_package())
        .join("docs");
    if !source.is_dir() {
        return Ok(());
    }

    let dest_root = workspace.join("docs");
    for entry in WalkDir::new(&source) {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(&source)
            .map_err(io::Error::other)?;
        let target = dest_root.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

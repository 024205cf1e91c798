//! Filesystem commit of generated sources.
//! Artifacts are staged into a scratch directory next to the target, written
//! concurrently, and moved into place in a single rename; the aggregate
//! index is only touched after every artifact is on disk.

use crate::error::{Error, Result};
use crate::template::GeneratedFile;
use log::debug;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Commits a rendered artifact set to the library package tree.
///
/// # Arguments
/// * `component_dir` - Target directory of the new component
/// * `files` - Rendered artifacts, unique relative paths
/// * `index_path` - The library's aggregate index file
/// * `export_line` - Line re-exporting the new component directory
///
/// # Errors
/// * `Error::ComponentExistsError` if the target directory is already
///   present; nothing is written in that case
/// * `Error::IoError` if staging, writing, or the final rename fails; a
///   failed run leaves no partial component directory behind
pub fn commit_component(
    component_dir: &Path,
    files: &[GeneratedFile],
    index_path: &Path,
    export_line: &str,
) -> Result<()> {
    if component_dir.exists() {
        return Err(Error::ComponentExistsError {
            component_dir: component_dir.display().to_string(),
        });
    }

    let parent = component_dir.parent().ok_or_else(|| {
        Error::IoError(io::Error::other("component directory has no parent"))
    })?;

    let staging = tempfile::Builder::new()
        .prefix(".c4gen-")
        .tempdir_in(parent)
        .map_err(Error::IoError)?;

    debug!(
        "Staging {} artifacts in {}",
        files.len(),
        staging.path().display()
    );
    write_artifacts(staging.path(), files)?;

    // A successful rename detaches the directory from the staging guard;
    // on failure the guard removes the staged files.
    fs::rename(staging.path(), component_dir).map_err(Error::IoError)?;

    append_export_line(index_path, export_line)
}

/// Writes all artifacts into `dir`, one writer thread per artifact.
///
/// The writes are independent of one another; all are joined and the first
/// failure surfaces.
fn write_artifacts(dir: &Path, files: &[GeneratedFile]) -> Result<()> {
    std::thread::scope(|scope| -> Result<()> {
        let writers: Vec<_> = files
            .iter()
            .map(|file| {
                let target = dir.join(&file.relative_path);
                scope.spawn(move || fs::write(target, &file.content))
            })
            .collect();

        for writer in writers {
            writer
                .join()
                .map_err(|_| io::Error::other("artifact writer thread panicked"))??;
        }
        Ok(())
    })
}

/// Appends the export line to the aggregate index file.
///
/// The append is an upsert: if the exact line is already present the index
/// is left untouched. A missing index file is created.
pub fn append_export_line(index_path: &Path, export_line: &str) -> Result<()> {
    let existing = fs::read_to_string(index_path).unwrap_or_default();
    if existing.lines().any(|line| line.trim() == export_line) {
        debug!(
            "Export line already present in {}, skipping append",
            index_path.display()
        );
        return Ok(());
    }

    let mut index_file =
        OpenOptions::new().create(true).append(true).open(index_path)?;
    if !existing.is_empty() && !existing.ends_with('\n') {
        writeln!(index_file)?;
    }
    writeln!(index_file, "{}", export_line)?;

    Ok(())
}

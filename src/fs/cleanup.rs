//! Output directory cleanup.
//!
//! A LaTeX run scatters auxiliary files (`.aux`, `.log`, ...) next to every
//! compiled booklet, and some compiler setups drop the PDF into a
//! subdirectory. After a batch the output directory is reduced to the
//! deliverables: nested PDFs are pulled up to the root, auxiliary files are
//! swept by extension, and emptied subdirectories are pruned.
//!
//! Individual file failures are recorded and skipped rather than aborting
//! the sweep; a locked `.log` file should not strand an otherwise finished
//! batch.

use crate::error::{MillError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions of auxiliary compiler artifacts removed by cleanup.
pub const AUX_EXTENSIONS: &[&str] = &["aux", "log", "out", "toc", "nav", "snm", "bcf", "xml"];

/// Extension of the rendered booklet sources.
pub const SOURCE_EXTENSION: &str = "tex";

/// What a cleanup pass did to the output directory.
#[derive(Debug, Default)]
pub struct CleanupReport {
    /// Nested PDFs moved up to the output directory root.
    pub collected_pdfs: usize,
    /// Files removed by the extension sweep.
    pub removed_files: usize,
    /// Emptied subdirectories pruned.
    pub pruned_dirs: usize,
    /// Paths that could not be moved or removed, with the reason.
    pub skipped: Vec<(PathBuf, String)>,
}

/// Run the full cleanup pass over an output directory.
///
/// Collects nested PDFs first so the extension sweep and the prune see the
/// final layout.
pub fn clean_output_tree(root: &Path, extensions: &[&str]) -> Result<CleanupReport> {
    let mut report = CleanupReport::default();

    let (collected, mut skipped) = collect_nested_pdfs(root)?;
    report.collected_pdfs = collected;
    report.skipped.append(&mut skipped);

    let (removed, mut skipped) = sweep_extensions(root, extensions)?;
    report.removed_files = removed;
    report.skipped.append(&mut skipped);

    report.pruned_dirs = prune_empty_dirs(root)?;

    Ok(report)
}

/// Move PDFs found in subdirectories up to the output directory root.
///
/// An existing root-level PDF with the same name is overwritten; the
/// nested copy is the fresher one.
pub fn collect_nested_pdfs(root: &Path) -> Result<(usize, Vec<(PathBuf, String)>)> {
    let mut files = Vec::new();
    walk_files(root, &mut files)?;

    let mut moved = 0;
    let mut skipped = Vec::new();

    for path in files {
        let is_pdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            continue;
        }

        let Some(file_name) = path.file_name() else {
            continue;
        };
        let dest = root.join(file_name);
        if dest == path {
            continue;
        }

        match fs::rename(&path, &dest) {
            Ok(()) => moved += 1,
            Err(e) => skipped.push((path, e.to_string())),
        }
    }

    Ok((moved, skipped))
}

/// Remove every file under `root` whose extension is in `extensions`.
pub fn sweep_extensions(
    root: &Path,
    extensions: &[&str],
) -> Result<(usize, Vec<(PathBuf, String)>)> {
    let globs = build_extension_globs(extensions)?;

    let mut files = Vec::new();
    walk_files(root, &mut files)?;

    let mut removed = 0;
    let mut skipped = Vec::new();

    for path in files {
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        if !globs.is_match(relative) {
            continue;
        }

        match fs::remove_file(&path) {
            Ok(()) => removed += 1,
            Err(e) => skipped.push((path, e.to_string())),
        }
    }

    Ok((removed, skipped))
}

/// Remove subdirectories of `root` that are (or become) empty.
///
/// Children are pruned before their parents so a directory holding only
/// empty directories goes too. The root itself is never removed.
pub fn prune_empty_dirs(root: &Path) -> Result<usize> {
    let mut pruned = 0;
    prune_children(root, &mut pruned)?;
    Ok(pruned)
}

fn prune_children(dir: &Path, pruned: &mut usize) -> Result<()> {
    for entry in read_dir(dir)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }

        prune_children(&path, pruned)?;

        // remove_dir only succeeds on an empty directory.
        if fs::remove_dir(&path).is_ok() {
            *pruned += 1;
        }
    }
    Ok(())
}

/// Build a GlobSet matching `**/*.{ext}` for each extension.
fn build_extension_globs(extensions: &[&str]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for ext in extensions {
        let pattern = format!("**/*.{}", ext);
        let glob = Glob::new(&pattern).map_err(|e| {
            MillError::UserError(format!("invalid cleanup pattern '{}': {}", pattern, e))
        })?;
        builder.add(glob);
    }

    builder
        .build()
        .map_err(|e| MillError::UserError(format!("failed to compile cleanup globs: {}", e)))
}

/// Collect every file under `root`, depth first.
fn walk_files(root: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in read_dir(root)? {
        let path = entry?.path();
        if path.is_dir() {
            walk_files(&path, files)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}

fn read_dir(dir: &Path) -> Result<impl Iterator<Item = Result<fs::DirEntry>>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        MillError::UserError(format!(
            "failed to read directory '{}': {}",
            dir.display(),
            e
        ))
    })?;

    let dir = dir.to_path_buf();
    Ok(entries.map(move |entry| {
        entry.map_err(|e| {
            MillError::UserError(format!(
                "failed to read directory entry in '{}': {}",
                dir.display(),
                e
            ))
        })
    }))
}

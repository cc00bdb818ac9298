use crate::{
    errors::{FileOperation, IoError},
    plan::Plan,
    spec::NodeKind,
};
use colored::Colorize;
use miette::Diagnostic;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Content written into every marker file.
pub const MARKER_CONTENT: &str = "# file automatically generated";

#[derive(Debug, Error, Diagnostic)]
pub enum MaterializeError {
    #[error("I/O error within materialize domain")]
    #[diagnostic(code(scaffy::materialize::io))]
    Io(#[from] IoError),
}

/// What happened to a single planned entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    CreatedDirectory(PathBuf),
    DirectoryExists(PathBuf),
    CreatedFile(PathBuf),
    FileExists(PathBuf),
    Skipped(String),
}

/// Creates every entry of `plan` under `root`, front to back.
///
/// Nothing is rolled back: when an entry fails, the entries already created stay on disk.
///
/// # Errors
///
/// Returns a [`MaterializeError`] on the first filesystem failure that is not covered by the
/// "already exists" policy, e.g. a marker file whose parent directory is missing.
pub fn apply(plan: Plan, root: &Path) -> Result<Vec<Outcome>, MaterializeError> {
    let mut outcomes = Vec::with_capacity(plan.entries.len());

    for entry in plan.entries {
        let outcome = match entry.kind {
            // directory names always resolve under the root, even when written as absolute
            NodeKind::Directory => {
                create_directory(&root.join(entry.path.trim_start_matches('/')))?
            }
            NodeKind::File => create_marker_file(&root.join(&entry.path))?,
            NodeKind::Other => {
                log::debug!("skipping {}: neither a directory nor a file", entry.path);

                Outcome::Skipped(entry.path)
            }
        };

        outcomes.push(outcome);
    }

    Ok(outcomes)
}

/// Creates `path` and any missing parents. An existing directory is left alone.
fn create_directory(path: &Path) -> Result<Outcome, MaterializeError> {
    if path.is_dir() {
        println!("{} {}", "exists".yellow(), path.display());

        return Ok(Outcome::DirectoryExists(path.to_path_buf()));
    }

    fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))?;

    println!("{} {}", "create".green(), path.display());

    Ok(Outcome::CreatedDirectory(path.to_path_buf()))
}

/// Writes a marker file at `path`. Existing files are never overwritten.
///
/// Only an existing regular file counts as "already there"; a directory in the way is an error.
fn create_marker_file(path: &Path) -> Result<Outcome, MaterializeError> {
    if path.is_file() {
        println!("{} {}", "exists".yellow(), path.display());

        return Ok(Outcome::FileExists(path.to_path_buf()));
    }

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|error| IoError::new(FileOperation::Create, path.into(), error))?;

    file.write_all(MARKER_CONTENT.as_bytes())
        .map_err(|error| IoError::new(FileOperation::Write, path.into(), error))?;

    println!("{} {}", "create".green(), path.display());

    Ok(Outcome::CreatedFile(path.to_path_buf()))
}

//! Writes the artifacts of a [`Conversion`] to disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::convert::Conversion;
use crate::error::Result;

pub const STRM_EXTENSION: &str = "strm";

/// Paths of the files a conversion produces inside `dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub strm: PathBuf,
    pub script: Option<PathBuf>,
}

impl ArtifactPaths {
    pub fn for_conversion(dir: &Path, conversion: &Conversion) -> Self {
        // Base names may contain dots, so append instead of `with_extension`.
        let file = |extension: &str| dir.join(format!("{}.{extension}", conversion.base_name));
        Self {
            strm: file(STRM_EXTENSION),
            script: conversion
                .script
                .as_ref()
                .map(|script| file(script.dialect.extension())),
        }
    }
}

/// Write the `.strm` file and, if present, the script into `dir`.
///
/// Every artifact is staged in a temp file inside `dir` first and only moved
/// into place once all of them were written. If moving one fails, the ones
/// already in place are removed again. POSIX scripts are marked executable
/// (`0o755`) on unix.
pub fn write_artifacts(dir: &Path, conversion: &Conversion) -> Result<ArtifactPaths> {
    let paths = ArtifactPaths::for_conversion(dir, conversion);

    let mut staged = vec![(stage(dir, &conversion.strm, FILE_MODE)?, &paths.strm)];
    if let (Some(script), Some(path)) = (&conversion.script, &paths.script) {
        let mode = if script.dialect.is_executable() {
            EXECUTABLE_MODE
        } else {
            FILE_MODE
        };
        staged.push((stage(dir, &script.contents, mode)?, path));
    }

    let mut persisted: Vec<&PathBuf> = Vec::with_capacity(staged.len());
    for (file, path) in staged {
        if let Err(err) = file.persist(path) {
            for done in persisted {
                if let Err(remove_err) = fs::remove_file(done) {
                    tracing::warn!("could not remove {}: {remove_err}", done.display());
                }
            }
            return Err(err.error.into());
        }
        tracing::info!("written: {}", path.display());
        persisted.push(path);
    }

    Ok(paths)
}

const FILE_MODE: u32 = 0o644;
const EXECUTABLE_MODE: u32 = 0o755;

fn stage(dir: &Path, contents: &str, mode: u32) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    set_mode(file.as_file(), mode)?;
    Ok(file)
}

#[cfg(unix)]
fn set_mode(file: &fs::File, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    file.set_permissions(fs::Permissions::from_mode(mode))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_mode(_file: &fs::File, _mode: u32) -> Result<()> {
    Ok(())
}

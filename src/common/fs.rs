//! Common file system operations with unified error handling

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, fs as fs_error};

/// Temporary sibling path used while writing `path`
fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map_or_else(|| "output".into(), |name| name.to_string_lossy());
    path.with_file_name(format!(".{file_name}.tmp"))
}

/// Write a file atomically (temp file + rename)
///
/// Readers never observe a partially written file, and if anything fails
/// the previous contents of `path` are left untouched. A stale temp file,
/// including a symlink planted at the temp path, is unlinked first and the
/// temp file is then created exclusively, so the write never follows a link.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp_path = temp_path_for(path);
    let write_failed =
        |e: io::Error| fs_error::write_failed(path.display().to_string(), e.to_string());

    match fs::remove_file(&tmp_path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(write_failed(e)),
    }

    if let Err(e) = write_new(&tmp_path, contents) {
        let _ = fs::remove_file(&tmp_path);
        return Err(write_failed(e));
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        write_failed(e)
    })
}

/// Create `path` (failing if anything already exists there) and write `contents`
fn write_new(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

//! Atomic in-place file replacement.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Replace the contents of `path` by writing a temporary sibling and
/// renaming it into place
///
/// The file at `path` is observable only as its old contents or the fully
/// written new contents: the write goes to `<path>.tmp` in the same
/// directory (so the rename stays on one filesystem) and the rename
/// happens only after the write completed. The temp file is removed if
/// either step fails.
///
/// # Errors
///
/// Returns the underlying I/O error from the write or the rename.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp = temp_sibling(path);
    fs::write(&tmp, bytes)
        .and_then(|()| fs::rename(&tmp, path))
        .map_err(|e| {
            let _ = fs::remove_file(&tmp);
            e
        })
}

/// `<path>.tmp`, keeping the original extension in place
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(OsString::from(".tmp"));
    PathBuf::from(name)
}

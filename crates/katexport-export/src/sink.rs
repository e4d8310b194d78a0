//! Output commit: whole-buffer write through a temporary path
//!
//! A partially written container is invalid, so the encoded bytes are
//! written to a sibling temporary file and renamed into place only on
//! success. A failed export leaves at most a removed temporary, never a
//! truncated file at the final path.

use std::fs;
use std::path::{Path, PathBuf};

use katexport_core::prelude::*;

/// Write `bytes` to `path` atomically with respect to the final path
pub fn commit(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = temp_path(path);

    if let Err(err) = fs::write(&tmp, bytes) {
        let _ = fs::remove_file(&tmp);
        return Err(Error::Io(err)).with_context(|| format!("writing {}", tmp.display()));
    }

    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(Error::Io(err)).with_context(|| format!("committing {}", path.display()));
    }

    Ok(())
}

/// Sibling temporary path: `<file name>.tmp` in the same directory, so the
/// rename never crosses a filesystem boundary
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

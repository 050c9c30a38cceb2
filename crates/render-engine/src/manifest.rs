//! Concat demuxer manifest.
//!
//! One `file '<path>'` line per input, newline-joined, no trailing newline.
//! Paths are written with forward slashes.

use std::path::{Path, MAIN_SEPARATOR};

use ytp_common::error::YtpResult;

/// Render `path` with `/` separators.
pub fn to_posix(path: &Path) -> String {
    let text = path.to_string_lossy();
    if MAIN_SEPARATOR == '/' {
        text.into_owned()
    } else {
        text.replace(MAIN_SEPARATOR, "/")
    }
}

/// Quote a path for the manifest. A literal `'` closes the quoted string,
/// is escaped, and reopens it.
fn quote(path: &str) -> String {
    format!("'{}'", path.replace('\'', r"'\''"))
}

/// Manifest text for `inputs`, in order.
pub fn manifest_contents<P: AsRef<Path>>(inputs: &[P]) -> String {
    inputs
        .iter()
        .map(|p| format!("file {}", quote(&to_posix(p.as_ref()))))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the manifest for `inputs` to `manifest_path`, creating parent
/// directories and overwriting any existing file.
pub fn write_manifest<P: AsRef<Path>>(inputs: &[P], manifest_path: &Path) -> YtpResult<()> {
    if let Some(parent) = manifest_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(manifest_path, manifest_contents(inputs))?;
    tracing::debug!(
        path = %manifest_path.display(),
        entries = inputs.len(),
        "Wrote concat manifest"
    );
    Ok(())
}

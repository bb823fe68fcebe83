use std::fs::{self, File};
use std::path::Path;

/// Exports of empty tables are rejected.
pub(crate) fn ensure_not_empty<T>(rows: &[T]) -> Result<(), Box<dyn std::error::Error>> {
    if rows.is_empty() {
        return Err("Nothing to export: no rows".into());
    }
    Ok(())
}

/// Create (or truncate) the output file, creating missing parent directories.
pub(crate) fn create_output_file(
    path: impl AsRef<Path>,
) -> Result<File, Box<dyn std::error::Error>> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(File::create(path)?)
}

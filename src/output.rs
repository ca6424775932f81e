use std::fs;
use std::fs::Permissions;
use std::io::Write;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use log::debug;
use tempfile::Builder;
use crate::error::PpmGenError;

// same request as a plain File::create, the process umask still applies
#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    Some(Permissions::from_mode(0o666))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}

/// Writes `data` next to `path` first and renames it over `path` once complete,
/// a failed run leaves any previous file untouched. An existing file keeps its permissions.
pub fn write_image(path: &Path, data: &str) -> Result<usize, PpmGenError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    if let Some(permissions) = new_file_permissions() {
        builder.permissions(permissions);
    }

    let mut file = builder.tempfile_in(dir)?;
    debug!("writing {} bytes to {}", data.len(), file.path().display());

    file.write_all(data.as_bytes())?;
    file.flush()?;

    if let Ok(metadata) = fs::metadata(path) {
        file.as_file().set_permissions(metadata.permissions())?;
    }

    file.persist(path)?;

    Ok(data.len())
}

//! Saving and restoring a route container as a single binary snapshot
mod error;
mod header;

pub use error::PersistenceError;

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{container::Container, model::Route};

/// Writes the container to `path`, replacing whatever was there.
/// The bytes go to `<path>.tmp` first and are renamed into place once synced.
#[tracing::instrument(err, skip(container), fields(routes = container.count()))]
pub fn save_container(path: &Path, container: &Container<Route>) -> Result<(), PersistenceError> {
    let payload = bitcode::serialize(container).map_err(PersistenceError::Encode)?;
    let bytes = header::wrap_with_header(&payload)?;

    let tmp_path = tmp_path_for(path);
    let file = File::create(&tmp_path).map_err(|e| PersistenceError::io(&tmp_path, e))?;

    if let Err(e) = write_then_rename(file, &bytes, &tmp_path, path) {
        // leave no partial tmp file behind
        _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    info!("wrote {} bytes", bytes.len());

    Ok(())
}

/// Closes `file` before the rename on every path.
fn write_then_rename(
    mut file: File,
    bytes: &[u8],
    tmp_path: &Path,
    path: &Path,
) -> Result<(), PersistenceError> {
    file.write_all(bytes)
        .map_err(|e| PersistenceError::io(tmp_path, e))?;
    file.sync_all()
        .map_err(|e| PersistenceError::io(tmp_path, e))?;
    drop(file);

    fs::rename(tmp_path, path).map_err(|e| PersistenceError::io(path, e))
}

#[tracing::instrument(err)]
pub fn load_container(path: &Path) -> Result<Container<Route>, PersistenceError> {
    let bytes = fs::read(path).map_err(|e| PersistenceError::io(path, e))?;
    let (header, payload) = header::unwrap_header(&bytes)?;

    let container: Container<Route> =
        bitcode::deserialize(payload).map_err(PersistenceError::Decode)?;

    info!(
        "read {} routes, format v{}",
        container.count(),
        header.format_version
    );

    Ok(container)
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

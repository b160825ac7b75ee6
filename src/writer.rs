use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{FetchError, Result};

/// Creates or truncates `path` and writes `bytes` into it.
///
/// The handle is dropped on return, whether the write succeeded or not.
pub fn write_artifact(path: &Path, bytes: &[u8]) -> Result<()> {
    log::debug!("Writing {} bytes to {:?}", bytes.len(), path);

    let write_err = |source| FetchError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = fs::File::create(path).map_err(write_err)?;
    file.write_all(bytes).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    Ok(())
}

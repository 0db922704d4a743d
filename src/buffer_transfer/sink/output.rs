use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::buffer_transfer::common::error::{Result, TransferError};
use crate::buffer_transfer::source::types::ContainerFormat;

/// Name of the file frame `frame` of a `frames`-long run is saved to.
///
/// A single frame is saved as `base.ext`; longer runs get a zero padded
/// frame number, `base-0000.ext`, `base-0001.ext`, ...
pub fn output_path<P: AsRef<Path>>(
    base: P,
    frame: u32,
    frames: u32,
    format: ContainerFormat,
) -> PathBuf {
    let base = base.as_ref();
    let mut name = base.as_os_str().to_os_string();
    if frames > 1 {
        name.push(format!("-{frame:04}"));
    }
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}

/// Opens `path` write-only, creating it or truncating an existing file.
pub fn create_output_file<P: AsRef<Path>>(path: P) -> Result<File> {
    let path = path.as_ref();
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| TransferError::OutputCreate(format!("{}: {}", path.display(), e)))
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures at the file boundary. Every variant carries the path that was
/// being operated on.
#[derive(Debug, Error)]
pub enum ByteBufError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("{} is not a regular file", path.display())]
    NotRegularFile { path: PathBuf },
}

use crate::models::{BlockMap, BlockMapError};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid block map in {path}: {source}")]
    InvalidBlockMap {
        path: PathBuf,
        source: BlockMapError,
    },
}

/// Read a JSON block map from disk and validate it
pub fn read_block_map(path: &Path) -> Result<BlockMap, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(IoError::Io)?;
    BlockMap::from_json(&content).map_err(|source| IoError::InvalidBlockMap {
        path: path.to_path_buf(),
        source,
    })
}

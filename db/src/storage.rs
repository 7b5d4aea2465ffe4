//! On-disk storage for lecture presentations.
//!
//! Files live under `{STORAGE_ROOT}/lectures/lecture_{id}/` and the database
//! keeps their path relative to the storage root.

use sea_orm::DbErr;
use std::{fs, io, path::PathBuf};
use util::paths::{ensure_dir, lecture_dir, relative_to_root, resolve, sanitize_filename};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("invalid file name: {0:?}")]
    InvalidName(String),
    #[error("file storage error: {0}")]
    Io(#[from] io::Error),
    #[error("database error: {0}")]
    Db(#[from] DbErr),
}

/// Writes `bytes` as `filename` in the lecture's directory and returns the
/// path relative to the storage root.
pub fn write_presentation(lecture_id: i64, filename: &str, bytes: &[u8]) -> Result<String, StorageError> {
    let name = sanitize_filename(filename)
        .ok_or_else(|| StorageError::InvalidName(filename.to_owned()))?;

    let dir = ensure_dir(lecture_dir(lecture_id))?;
    let path: PathBuf = dir.join(&name);
    fs::write(&path, bytes)?;

    relative_to_root(&path).ok_or_else(|| {
        StorageError::Io(io::Error::other(format!(
            "{} is outside the storage root",
            path.display()
        )))
    })
}

/// Removes a single stored file. A file that is already gone is not an error.
pub fn remove_file(relative: &str) -> io::Result<()> {
    match fs::remove_file(resolve(relative)) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

/// Removes everything stored for a lecture.
pub fn remove_lecture_dir(lecture_id: i64) -> io::Result<()> {
    match fs::remove_dir_all(lecture_dir(lecture_id)) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

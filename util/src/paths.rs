use crate::config;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Create a directory (and all parents) if it doesn't exist, and return the path.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> io::Result<PathBuf> {
    let p = path.as_ref();
    fs::create_dir_all(p)?;
    Ok(p.to_path_buf())
}

/// Global storage root (absolute), from `config::storage_root()`.
/// If relative in env, resolve against current_dir().
pub fn storage_root() -> PathBuf {
    let p = PathBuf::from(config::storage_root());
    if p.is_absolute() {
        p
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(p)
    }
}

/// {STORAGE_ROOT}/lectures/lecture_{lecture_id}
pub fn lecture_dir(lecture_id: i64) -> PathBuf {
    storage_root()
        .join("lectures")
        .join(format!("lecture_{lecture_id}"))
}

/// Resolves a path stored relative to the storage root.
pub fn resolve(relative: &str) -> PathBuf {
    storage_root().join(relative)
}

/// Strips the storage root from an absolute path, for persisting.
pub fn relative_to_root(path: &Path) -> Option<String> {
    path.strip_prefix(storage_root())
        .ok()
        .map(|p| p.to_string_lossy().replace('\\', "/"))
}

/// Keeps only the final path component and drops characters that are unsafe
/// in a file name. Returns `None` when nothing usable remains.
pub fn sanitize_filename(name: &str) -> Option<String> {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | ' '))
        .collect();
    let cleaned = cleaned.trim().trim_start_matches('.').to_string();
    if cleaned.is_empty() { None } else { Some(cleaned) }
}

//! Atomic file writes guarded by an advisory lock.
//!
//! Writes go to a hidden temporary file in the target directory, are fsynced,
//! and are then renamed over the target, so readers only ever see the old or
//! the new content.

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use widgets_core::WidgetsError;

/// Errors that can occur during atomic file operations.
#[derive(Debug)]
pub enum StorageError {
    /// File I/O error.
    IoError(std::io::Error),
    /// TOML parse error.
    TomlError(toml::de::Error),
    /// TOML serialization error.
    TomlSerError(toml::ser::Error),
    /// File locking error.
    LockError(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::IoError(e) => write!(f, "I/O error: {}", e),
            StorageError::TomlError(e) => write!(f, "TOML parse error: {}", e),
            StorageError::TomlSerError(e) => write!(f, "TOML serialization error: {}", e),
            StorageError::LockError(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::IoError(e)
    }
}

impl From<toml::de::Error> for StorageError {
    fn from(e: toml::de::Error) -> Self {
        StorageError::TomlError(e)
    }
}

impl From<toml::ser::Error> for StorageError {
    fn from(e: toml::ser::Error) -> Self {
        StorageError::TomlSerError(e)
    }
}

impl From<StorageError> for WidgetsError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::IoError(io) => io.into(),
            StorageError::TomlError(de) => de.into(),
            StorageError::TomlSerError(ser) => ser.into(),
            StorageError::LockError(message) => WidgetsError::io(message),
        }
    }
}

/// Returns the hidden temporary sibling used while writing `path`.
pub fn temp_path_for(path: &Path) -> Result<PathBuf, StorageError> {
    sibling_path(path, ".", ".tmp")
}

/// Returns the sibling lock file of `path`.
///
/// The suffix is appended to the full file name, so the lock never coincides
/// with the file it guards.
pub fn lock_path_for(path: &Path) -> Result<PathBuf, StorageError> {
    sibling_path(path, "", ".lock")
}

fn sibling_path(path: &Path, prefix: &str, suffix: &str) -> Result<PathBuf, StorageError> {
    let parent = path.parent().ok_or_else(|| {
        StorageError::IoError(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Path has no parent directory",
        ))
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        StorageError::IoError(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Path has no file name",
        ))
    })?;

    Ok(parent.join(format!("{}{}{}", prefix, file_name.to_string_lossy(), suffix)))
}

/// Replaces the content of `path` atomically, creating parent directories.
pub fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let _lock = FileLock::acquire(path)?;

    let tmp_path = temp_path_for(path)?;
    let mut tmp_file = File::create(&tmp_path)?;
    tmp_file.write_all(contents)?;
    tmp_file.sync_all()?;
    drop(tmp_file);

    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// An exclusive lock on `<file name>.lock` next to the guarded file, released
/// on drop.
pub struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    /// Acquires an exclusive lock for the given path.
    pub fn acquire(path: &Path) -> Result<Self, StorageError> {
        let lock_path = lock_path_for(path)?;

        if let Some(parent) = lock_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| StorageError::LockError(format!("Failed to acquire lock: {}", e)))?;
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Best effort; the lock itself goes away with the handle
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parents_and_leaves_no_temp() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("out.json");

        write_atomically(&path, b"{}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert!(!temp_dir.path().join("nested").join(".out.json.tmp").exists());
        assert!(!temp_dir.path().join("nested").join("out.json.lock").exists());
    }

    #[test]
    fn test_write_replaces_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        write_atomically(&path, b"first").unwrap();
        write_atomically(&path, b"second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_target_with_lock_extension_survives() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("backup.lock");

        write_atomically(&path, b"{}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert!(!temp_dir.path().join("backup.lock.lock").exists());
    }

    #[test]
    fn test_lock_path_appends_to_file_name() {
        assert_eq!(
            lock_path_for(Path::new("/data/widgets_export.json")).unwrap(),
            PathBuf::from("/data/widgets_export.json.lock")
        );
        assert_eq!(
            lock_path_for(Path::new("/data/backup.lock")).unwrap(),
            PathBuf::from("/data/backup.lock.lock")
        );
    }

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let tmp = temp_path_for(Path::new("/data/widgets_export.json")).unwrap();
        assert_eq!(tmp, PathBuf::from("/data/.widgets_export.json.tmp"));
    }
}

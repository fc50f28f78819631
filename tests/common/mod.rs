// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create an empty scratch directory
pub fn create_test_dir() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let root = fs::canonicalize(dir.path()).unwrap();
    (dir, root)
}

/// Write a file of `len` bytes at `rel` below `root`, creating parents
pub fn write_file(root: &Path, rel: &str, len: usize) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, vec![b'x'; len]).unwrap();
    path
}

/// Create a (possibly nested) directory at `rel` below `root`
pub fn make_dir(root: &Path, rel: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(&path).unwrap();
    path
}

/// Build a small project-like tree:
///
/// ```text
/// big.iso              4096
/// src/main.rs           300
/// src/util/fmt.rs       200
/// src/util/deep/x.rs    100
/// .git/objects/pack/p  1000
/// empty/
/// ```
pub fn create_sample_tree() -> (TempDir, PathBuf) {
    let (dir, root) = create_test_dir();
    write_file(&root, "big.iso", 4096);
    write_file(&root, "src/main.rs", 300);
    write_file(&root, "src/util/fmt.rs", 200);
    write_file(&root, "src/util/deep/x.rs", 100);
    write_file(&root, ".git/objects/pack/p", 1000);
    make_dir(&root, "empty");
    (dir, root)
}

/// Revokes all permissions on a directory and restores them on drop
#[cfg(unix)]
pub struct LockedDir {
    path: PathBuf,
}

#[cfg(unix)]
impl LockedDir {
    /// Returns `None` when the lock has no effect (e.g. running as root)
    pub fn lock(path: &Path) -> Option<Self> {
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(path, fs::Permissions::from_mode(0o000)).unwrap();
        let guard = Self {
            path: path.to_path_buf(),
        };
        if fs::read_dir(path).is_ok() {
            return None;
        }
        Some(guard)
    }
}

#[cfg(unix)]
impl Drop for LockedDir {
    fn drop(&mut self) {
        use std::os::unix::fs::PermissionsExt;

        let _ = fs::set_permissions(&self.path, fs::Permissions::from_mode(0o755));
    }
}

/// Create a named pipe at `rel` below `root` with the system `mkfifo`.
/// Returns `None` when the tool is unavailable.
#[cfg(unix)]
pub fn make_fifo(root: &Path, rel: &str) -> Option<PathBuf> {
    let path = root.join(rel);
    let status = std::process::Command::new("mkfifo")
        .arg(&path)
        .status()
        .ok()?;
    status.success().then_some(path)
}

// Shared benchmark helpers
// Functions here are used across different benchmark files
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Generate a directory tree with `fanout` subdirectories per level,
/// `levels` deep, and `files_per_dir` small files in every directory
pub fn generate_dir_tree(levels: usize, fanout: usize, files_per_dir: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    populate(dir.path(), levels, fanout, files_per_dir);
    dir
}

fn populate(path: &Path, levels: usize, fanout: usize, files_per_dir: usize) {
    for i in 0..files_per_dir {
        fs::write(path.join(format!("file_{}.dat", i)), vec![b'x'; 64 + i]).unwrap();
    }
    if levels == 0 {
        return;
    }
    for i in 0..fanout {
        let child = path.join(format!("dir_{}", i));
        fs::create_dir(&child).unwrap();
        populate(&child, levels - 1, fanout, files_per_dir);
    }
}

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Find the first directory called `name` below `root`.
///
/// Traversal is depth-first pre-order over directories, siblings in
/// ascending file-name order. Each visited directory's own child `name` is
/// checked before descending, so `root/dev_flash` wins over
/// `root/a/dev_flash`, while `root/a/b/dev_flash` wins over
/// `root/c/dev_flash`. `root` itself never matches. Unreadable directories
/// are skipped.
pub fn find_dir(root: &Path, name: &str) -> Option<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.path().join(name))
        .find(|candidate| candidate.is_dir())
}

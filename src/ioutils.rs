use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir_all(dest_path.as_ref()).map_err(Error::IoError)
}

/// Copy a single file, creating parent directories if needed.
pub fn copy_file<P: AsRef<Path>>(source_path: P, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::copy(source_path.as_ref(), dest_path).map(|_| ()).map_err(Error::IoError)
}

/// Recursively copy a directory tree. Conflicting files in the destination
/// are overwritten; the overwrite decision for the tree root has already been
/// made by the caller.
pub fn copy_dir_all<P: AsRef<Path>>(source_dir: P, dest_dir: P) -> Result<()> {
    let source_dir = source_dir.as_ref();
    let dest_dir = dest_dir.as_ref();
    create_dir_all(dest_dir)?;
    for entry in read_dir_sorted(source_dir)? {
        let source = source_dir.join(&entry);
        let dest = dest_dir.join(&entry);
        if source.is_dir() {
            copy_dir_all(&source, &dest)?;
        } else {
            copy_file(&source, &dest)?;
        }
    }
    Ok(())
}

/// Lists the entry names of a directory, sorted by name for a deterministic
/// scan order.
pub fn read_dir_sorted<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
    let mut names: Vec<String> = std::fs::read_dir(dir.as_ref())?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().to_str().map(String::from))
        .collect();
    names.sort();
    Ok(names)
}

/// Returns the file name of a path as an owned string.
pub fn file_name_of(path: &Path) -> Result<String> {
    path.file_name().and_then(|name| name.to_str()).map(String::from).ok_or_else(|| {
        Error::ProcessError {
            source_path: path.display().to_string(),
            e: "path has no usable file name".to_string(),
        }
    })
}

/// Absolute form of an operator-supplied target path, resolved against the
/// current working directory when relative.
pub fn absolutize<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn read_dir_sorted_orders_entries_by_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("zeta.txt"), "z").unwrap();
        fs::write(dir.path().join("alpha.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("mid")).unwrap();

        let names = read_dir_sorted(dir.path()).unwrap();
        assert_eq!(names, vec!["alpha.txt", "mid", "zeta.txt"]);
    }

    #[test]
    fn copy_dir_all_replicates_nested_tree() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        fs::create_dir_all(source.path().join("nested/deep")).unwrap();
        fs::write(source.path().join("root.txt"), "root").unwrap();
        fs::write(source.path().join("nested/deep/leaf.txt"), "leaf").unwrap();

        let dest_root = dest.path().join("out");
        copy_dir_all(&source.path().to_path_buf(), &dest_root).unwrap();

        assert_eq!(fs::read_to_string(dest_root.join("root.txt")).unwrap(), "root");
        assert_eq!(
            fs::read_to_string(dest_root.join("nested/deep/leaf.txt")).unwrap(),
            "leaf"
        );
    }

    #[test]
    fn copy_file_creates_missing_parents() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        let source_file = source.path().join("a.txt");
        fs::write(&source_file, "hello").unwrap();

        let dest_file = dest.path().join("x/y/a.txt");
        copy_file(&source_file, &dest_file).unwrap();
        assert_eq!(fs::read_to_string(dest_file).unwrap(), "hello");
    }
}

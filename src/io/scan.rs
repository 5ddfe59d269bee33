use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Every file under `dir` (recursively) whose extension is exactly `extension`,
/// in sorted path order.
pub fn find_files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some(extension) {
            files.push(path.to_path_buf());
        }
    }
    debug!("Found {} .{} files under {:?}", files.len(), extension, dir);
    Ok(files)
}

/// Rename `src` to `dst`, refusing to replace an existing file.
pub fn move_no_clobber(src: &Path, dst: &Path) -> Result<()> {
    if dst.exists() {
        return Err(Error::Collision {
            path: dst.to_path_buf(),
        });
    }
    fs::rename(src, dst)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recursive_discovery_filters_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("pack/sub")).unwrap();
        fs::write(dir.path().join("b.png"), b"").unwrap();
        fs::write(dir.path().join("pack/a.png"), b"").unwrap();
        fs::write(dir.path().join("pack/sub/c.png"), b"").unwrap();
        fs::write(dir.path().join("pack/readme.txt"), b"").unwrap();
        fs::write(dir.path().join("pack/upper.PNG"), b"").unwrap();

        let found = find_files_with_extension(dir.path(), "png").unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("b.png"),
                PathBuf::from("pack/a.png"),
                PathBuf::from("pack/sub/c.png"),
            ]
        );
    }

    #[test]
    fn test_move_refuses_existing_destination() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.png");
        let dst = dir.path().join("b.png");
        fs::write(&src, b"new").unwrap();
        fs::write(&dst, b"old").unwrap();

        assert!(matches!(move_no_clobber(&src, &dst), Err(Error::Collision { .. })));
        assert_eq!(fs::read(&dst).unwrap(), b"old");
        assert!(src.exists());
    }
}

/*!
 * Pre-order directory walk shared by the tree renderer and content assembler
 *
 * Directories are visited top-down with an explicit stack, so deep trees
 * never grow the call stack. Each visit yields the directory together with
 * its immediate entries sorted by file name.
 */

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{Code2TextError, Result};
use crate::types::{DirectoryEntry, DirectoryListing};

/// Iterator over every directory below (and including) a root
pub struct Walk {
    stack: Vec<(PathBuf, usize)>,
}

impl Walk {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            stack: vec![(root.into(), 0)],
        }
    }
}

impl Iterator for Walk {
    type Item = Result<DirectoryListing>;

    fn next(&mut self) -> Option<Self::Item> {
        let (path, level) = self.stack.pop()?;

        if level == 0 && !path.is_dir() {
            return None;
        }

        let entries = match list_directory(&path, level) {
            Ok(entries) => entries,
            // An unreadable or missing root walks as an empty tree
            Err(_) if level == 0 => {
                self.stack.clear();
                return None;
            }
            Err(e) => {
                self.stack.clear();
                return Some(Err(e));
            }
        };

        // Reversed so the first subdirectory is popped next
        self.stack.extend(
            entries
                .iter()
                .rev()
                .filter(|e| !e.is_file)
                .map(|e| (e.path.clone(), level + 1)),
        );

        Some(Ok(DirectoryListing {
            path,
            level,
            entries,
        }))
    }
}

fn list_directory(dir: &Path, level: usize) -> Result<Vec<DirectoryEntry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| Code2TextError::traversal(dir, e.into()))?;

        if let Some(is_file) = classify(&entry) {
            entries.push(DirectoryEntry {
                path: entry.path().to_path_buf(),
                level,
                name: entry.file_name().to_string_lossy().into_owned(),
                is_file,
            });
        }
    }

    Ok(entries)
}

/// `Some(false)` for directories to descend into, `Some(true)` for files,
/// `None` for symlinks pointing at directories (never listed or followed).
fn classify(entry: &DirEntry) -> Option<bool> {
    let file_type = entry.file_type();

    if file_type.is_dir() {
        Some(false)
    } else if file_type.is_symlink() && entry.path().is_dir() {
        None
    } else {
        Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> std::io::Result<TempDir> {
        let temp_dir = tempfile::Builder::new().prefix("walk").tempdir()?;
        let root = temp_dir.path();

        fs::create_dir_all(root.join("b").join("inner"))?;
        fs::create_dir(root.join("a"))?;
        fs::write(root.join("z.py"), "")?;
        fs::write(root.join("m.py"), "")?;
        fs::write(root.join("a").join("one.py"), "")?;
        fs::write(root.join("b").join("inner").join("deep.py"), "")?;

        Ok(temp_dir)
    }

    fn names(listing: &DirectoryListing) -> Vec<&str> {
        listing.entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_pre_order_with_sorted_entries() -> Result<()> {
        let temp_dir = fixture()?;
        let root = temp_dir.path();

        let listings = Walk::new(root).collect::<Result<Vec<_>>>()?;
        let visited: Vec<(PathBuf, usize)> = listings
            .iter()
            .map(|l| (l.path.clone(), l.level))
            .collect();

        assert_eq!(
            visited,
            vec![
                (root.to_path_buf(), 0),
                (root.join("a"), 1),
                (root.join("b"), 1),
                (root.join("b").join("inner"), 2),
            ]
        );
        assert_eq!(names(&listings[0]), vec!["a", "b", "m.py", "z.py"]);
        assert_eq!(
            listings[0].files().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            vec!["m.py", "z.py"]
        );
        assert_eq!(listings[0].subdirectories().count(), 2);

        Ok(())
    }

    #[test]
    fn test_entry_paths_extend_the_given_root() -> Result<()> {
        let temp_dir = fixture()?;
        let root = temp_dir.path();

        let deep = Walk::new(root)
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flat_map(|l| l.entries)
            .find(|e| e.name == "deep.py")
            .expect("deep.py is walked");

        assert_eq!(deep.path, root.join("b").join("inner").join("deep.py"));
        assert_eq!(deep.level, 2);
        Ok(())
    }

    #[test]
    fn test_missing_root_walks_empty() {
        let temp_dir = tempfile::Builder::new().prefix("walk").tempdir().unwrap();
        let mut walk = Walk::new(temp_dir.path().join("absent"));
        assert!(walk.next().is_none());
    }

    #[test]
    fn test_file_root_walks_empty() {
        let temp_dir = tempfile::Builder::new().prefix("walk").tempdir().unwrap();
        let file = temp_dir.path().join("single.py");
        fs::write(&file, "x").unwrap();

        assert_eq!(Walk::new(file).count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_symlinks_are_not_followed() -> Result<()> {
        let temp_dir = fixture()?;
        let root = temp_dir.path();
        std::os::unix::fs::symlink(root.join("a"), root.join("link_to_a"))?;
        std::os::unix::fs::symlink(root.join("m.py"), root.join("link_to_m.py"))?;

        let listings = Walk::new(root).collect::<Result<Vec<_>>>()?;

        assert_eq!(listings.len(), 4);
        assert_eq!(names(&listings[0]), vec!["a", "b", "link_to_m.py", "m.py", "z.py"]);
        Ok(())
    }
}

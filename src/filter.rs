/*!
 * Inclusion rules shared by the walk consumers
 *
 * A file qualifies when it is not hidden (only checked when hidden files
 * are excluded) and its name ends with one of the configured suffixes.
 */

use std::borrow::Cow;
use std::env;
use std::path::{Component, Path};

use path_clean::PathClean;

/// Whether any component of `path` starts with `.` or `__`.
///
/// Purely lexical: `.` and `..` components are not names and are ignored,
/// so normalize first if the path may contain them.
pub fn is_hidden_path(path: &Path) -> bool {
    path.components().any(|component| match component {
        Component::Normal(name) => {
            let name = name.to_string_lossy();
            name.starts_with('.') || name.starts_with("__")
        }
        _ => false,
    })
}

/// Hidden check against the absolute form of `path`.
///
/// Every ancestor counts, including those above the traversal root.
/// Symlinks are not resolved.
pub fn is_hidden(path: &Path) -> bool {
    is_hidden_path(&absolute(path))
}

fn absolute(path: &Path) -> Cow<'_, Path> {
    if path.is_absolute() {
        return Cow::Owned(path.clean());
    }

    match env::current_dir() {
        Ok(cwd) => Cow::Owned(cwd.join(path).clean()),
        Err(_) => Cow::Borrowed(path),
    }
}

/// Plain string-suffix match of a file name against the configured suffixes
pub fn matches_extension<S: AsRef<str>>(name: &str, extensions: &[S]) -> bool {
    extensions.iter().any(|ext| name.ends_with(ext.as_ref()))
}

/// The suffix from the last `.` of a file name, or `""`.
///
/// Leading dots do not start an extension, so `.bashrc` has none.
pub fn extension_of(name: &str) -> &str {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name[stem_start..].rfind('.') {
        Some(idx) => &name[stem_start + idx..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_hidden_components() {
        assert!(is_hidden_path(Path::new("/work/.git/config")));
        assert!(is_hidden_path(Path::new("/work/pkg/__pycache__/mod.py")));
        assert!(is_hidden_path(Path::new("/work/.hidden.py")));
        assert!(is_hidden_path(Path::new("/work/pkg/__init__.py")));

        assert!(!is_hidden_path(Path::new("/work/pkg/mod.py")));
        assert!(!is_hidden_path(Path::new("/work/pkg/_private.py")));
        assert!(!is_hidden_path(Path::new("/work/pkg/file.hidden.py")));
    }

    #[test]
    fn test_dot_components_are_not_names() {
        assert!(!is_hidden_path(Path::new("./src/../lib.py")));
        assert!(!is_hidden_path(Path::new("/")));
    }

    #[test]
    fn test_is_hidden_normalizes_parent_components() {
        let path: PathBuf = ["/work", "src", "..", "lib.py"].iter().collect();
        assert!(!is_hidden(&path));

        let path: PathBuf = ["/work", ".venv", "..", "lib.py"].iter().collect();
        assert!(!is_hidden(&path));

        let path: PathBuf = ["/work", "src", "..", ".env", "lib.py"].iter().collect();
        assert!(is_hidden(&path));
    }

    #[test]
    fn test_matches_extension() {
        let exts = [".py", ".txt"];
        assert!(matches_extension("a.py", &exts));
        assert!(matches_extension("foo.something.py", &exts));
        assert!(matches_extension("notes.txt", &exts));
        assert!(!matches_extension("a.pyc", &exts));
        assert!(!matches_extension("data.csv", &exts));
    }

    #[test]
    fn test_empty_extension_set_matches_nothing() {
        let exts: [&str; 0] = [];
        assert!(!matches_extension("a.py", &exts));
    }

    #[test]
    fn test_suffix_need_not_start_with_dot() {
        assert!(matches_extension("Makefile", &["file"]));
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("a.py"), ".py");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("Makefile"), "");
        assert_eq!(extension_of(".bashrc"), "");
        assert_eq!(extension_of(".hidden.py"), ".py");
        assert_eq!(extension_of("trailing."), ".");
    }
}

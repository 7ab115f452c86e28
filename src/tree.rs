/*!
 * Folder structure rendering
 */

use std::path::Path;
use std::sync::Arc;

use crate::config::TraversalConfig;
use crate::diagnostics::{Diagnostic, DiagnosticSink, SilentSink};
use crate::error::Result;
use crate::walker::Walk;

/// One level of indentation
const INDENT: &str = "    ";

/// Renders every directory and file below a root as an indented outline.
///
/// Neither the extension filter nor the hidden-path rule applies here.
pub struct TreeRenderer {
    config: TraversalConfig,
    sink: Arc<dyn DiagnosticSink>,
}

impl TreeRenderer {
    pub fn new(config: TraversalConfig, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { config, sink }
    }

    /// Render the outline, one `name/` line per directory followed by its files
    pub fn render(&self) -> Result<String> {
        let mut tree = String::new();

        for listing in Walk::new(&self.config.root) {
            let listing = listing?;
            let indent = INDENT.repeat(listing.level);

            let name = if listing.level == 0 {
                display_name(&listing.path)
            } else {
                listing
                    .path
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .into_owned()
            };
            tree.push_str(&format!("{indent}{name}/\n"));

            for file in listing.files() {
                tree.push_str(&format!("{indent}{INDENT}{}\n", file.name));
            }
        }

        if self.config.verbose {
            self.sink.emit(&Diagnostic::FileTree(tree.clone()));
        }

        Ok(tree)
    }
}

/// Render the outline of `root` without diagnostics
pub fn render_tree(root: impl AsRef<Path>) -> Result<String> {
    TreeRenderer::new(
        TraversalConfig::new(root.as_ref()),
        Arc::new(SilentSink),
    )
    .render()
}

/// Last component of the root, or the path itself when it has none (`.`)
fn display_name(root: &Path) -> String {
    match root.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => root.to_string_lossy().into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::sync::Mutex;

    fn temp_root(prefix: &str) -> std::io::Result<tempfile::TempDir> {
        tempfile::Builder::new().prefix(prefix).tempdir()
    }

    #[test]
    fn test_empty_directory() -> Result<()> {
        let temp_dir = temp_root("tree")?;
        let root = temp_dir.path().join("empty");
        fs::create_dir(&root)?;

        assert_eq!(render_tree(&root)?, "empty/\n");
        Ok(())
    }

    #[test]
    fn test_nested_outline() -> Result<()> {
        let temp_dir = temp_root("tree")?;
        let root = temp_dir.path().join("proj");
        fs::create_dir_all(root.join("pkg").join("sub"))?;
        fs::create_dir_all(root.join(".git"))?;
        fs::write(root.join("setup.py"), "")?;
        fs::write(root.join("README.md"), "")?;
        fs::write(root.join(".git").join("HEAD"), "")?;
        fs::write(root.join("pkg").join("__init__.py"), "")?;
        fs::write(root.join("pkg").join("sub").join("core.py"), "")?;

        let expected = "\
proj/
    README.md
    setup.py
    .git/
        HEAD
    pkg/
        __init__.py
        sub/
            core.py
";
        assert_eq!(render_tree(&root)?, expected);
        Ok(())
    }

    #[test]
    fn test_missing_root_renders_nothing() -> Result<()> {
        let temp_dir = temp_root("tree")?;
        assert_eq!(render_tree(temp_dir.path().join("gone"))?, "");
        Ok(())
    }

    #[test]
    fn test_verbose_reports_tree_without_changing_it() -> Result<()> {
        let temp_dir = temp_root("tree")?;
        let root = temp_dir.path().join("proj");
        fs::create_dir(&root)?;
        fs::write(root.join("a.py"), "")?;

        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&seen);
        let sink = Arc::new(move |d: &Diagnostic| recorder.lock().unwrap().push(d.clone()));

        let quiet = render_tree(&root)?;
        let loud = TreeRenderer::new(TraversalConfig::new(&root).verbose(true), sink).render()?;

        assert_eq!(quiet, loud);
        assert_eq!(*seen.lock().unwrap(), vec![Diagnostic::FileTree(loud)]);
        Ok(())
    }

    #[test]
    fn test_display_name_of_dot() {
        assert_eq!(display_name(Path::new(".")), ".");
        assert_eq!(display_name(Path::new("a/b/")), "b");
    }
}

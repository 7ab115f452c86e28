/*!
 * Document composition
 */

use std::fs;
use std::sync::Arc;

use crate::assembler::ContentAssembler;
use crate::config::TraversalConfig;
use crate::diagnostics::DiagnosticSink;
use crate::error::{Code2TextError, Result};
use crate::tree::TreeRenderer;
use crate::utils::RULE;

pub const FOLDER_STRUCTURE_HEADER: &str = "Folder Structure";
pub const FILE_CONTENTS_HEADER: &str = "File Contents";

/// Frame the rendered tree and the assembled contents under their headers
pub fn compose(tree: &str, contents: &str) -> String {
    format!(
        "{FOLDER_STRUCTURE_HEADER}\n{RULE}\n{tree}\n\n{FILE_CONTENTS_HEADER}\n{RULE}\n{contents}"
    )
}

/// Build the complete document for `config.root`.
///
/// Fails with a traversal error when the root itself cannot be listed.
pub fn generate(config: &TraversalConfig, sink: Arc<dyn DiagnosticSink>) -> Result<String> {
    fs::read_dir(&config.root).map_err(|e| Code2TextError::traversal(&config.root, e))?;

    let tree = TreeRenderer::new(config.clone(), Arc::clone(&sink)).render()?;
    let contents = ContentAssembler::new(config.clone(), sink).assemble()?;

    Ok(compose(&tree, &contents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::diagnostics::SilentSink;

    #[test]
    fn test_compose_framing() {
        let document = compose("root/\n    a.py\n", "BODY");
        assert_eq!(
            document,
            "Folder Structure\n\
             --------------------------------------------------\n\
             root/\n    a.py\n\n\n\
             File Contents\n\
             --------------------------------------------------\n\
             BODY"
        );
    }

    #[test]
    fn test_compose_with_nothing_found() {
        assert_eq!(
            compose("", ""),
            format!("Folder Structure\n{RULE}\n\n\nFile Contents\n{RULE}\n")
        );
    }

    #[test]
    fn test_generate_missing_root_is_traversal_failure() {
        let temp_dir = tempfile::Builder::new().prefix("doc").tempdir().unwrap();
        let config = TraversalConfig::new(temp_dir.path().join("missing"));

        let err = generate(&config, Arc::new(SilentSink)).unwrap_err();
        assert!(matches!(err, Code2TextError::Traversal { ref path, .. } if *path == config.root));
    }

    #[test]
    fn test_generate_file_root_is_traversal_failure() {
        let temp_dir = tempfile::Builder::new().prefix("doc").tempdir().unwrap();
        let file = temp_dir.path().join("lonely.py");
        fs::write(&file, "x").unwrap();

        let result = generate(&TraversalConfig::new(file), Arc::new(SilentSink));
        assert!(matches!(result, Err(Code2TextError::Traversal { .. })));
    }
}

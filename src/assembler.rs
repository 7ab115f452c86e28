/*!
 * Content assembly
 *
 * Walks the same tree as the renderer and concatenates one block per
 * qualifying file. A file that cannot be read is reported and left out;
 * it never aborts the document.
 */

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::config::TraversalConfig;
use crate::diagnostics::{Diagnostic, DiagnosticSink, SilentSink};
use crate::error::{Code2TextError, Result};
use crate::filter::{is_hidden, matches_extension};
use crate::types::{DirectoryEntry, FileBlock};
use crate::walker::Walk;

/// Outcome of applying the inclusion rules to one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualification {
    Included,
    Hidden,
    UnmatchedExtension,
}

/// Concatenates the contents of qualifying files
pub struct ContentAssembler {
    config: TraversalConfig,
    sink: Arc<dyn DiagnosticSink>,
}

impl ContentAssembler {
    pub fn new(config: TraversalConfig, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { config, sink }
    }

    /// Apply the hidden-path rule, then the extension rule
    pub fn qualify(&self, path: &Path, name: &str) -> Qualification {
        if self.config.exclude_hidden && is_hidden(path) {
            Qualification::Hidden
        } else if !matches_extension(name, &self.config.file_extensions) {
            Qualification::UnmatchedExtension
        } else {
            Qualification::Included
        }
    }

    /// Build the file-contents section
    pub fn assemble(&self) -> Result<String> {
        let mut content = String::new();

        for listing in Walk::new(&self.config.root) {
            let listing = listing?;

            for file in listing.files() {
                self.process_file(file, &mut content);
            }
        }

        Ok(content)
    }

    fn process_file(&self, file: &DirectoryEntry, content: &mut String) {
        match self.qualify(&file.path, &file.name) {
            Qualification::Hidden => {
                self.verbose(Diagnostic::HiddenSkipped(file.path.clone()));
                return;
            }
            Qualification::UnmatchedExtension => {
                self.verbose(Diagnostic::ExtensionSkipped(file.path.clone()));
                return;
            }
            Qualification::Included => {}
        }

        self.verbose(Diagnostic::Processing(file.path.clone()));

        match read_file_content(&file.path) {
            Ok(raw) => {
                let block = FileBlock::new(&file.path, &file.name, &raw);
                content.push_str(&block.to_string());
            }
            Err(Code2TextError::FileRead { path, source }) => {
                self.sink.emit(&Diagnostic::ReadFailed {
                    path,
                    reason: source.to_string(),
                });
            }
            Err(other) => {
                self.sink.emit(&Diagnostic::ReadFailed {
                    path: file.path.clone(),
                    reason: other.to_string(),
                });
            }
        }
    }

    fn verbose(&self, diagnostic: Diagnostic) {
        if self.config.verbose {
            self.sink.emit(&diagnostic);
        }
    }
}

/// Read a whole file as UTF-8 text; the handle is closed before returning
fn read_file_content(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Code2TextError::file_read(path, e))
}

/// Assemble `config.root` without diagnostics
pub fn assemble_contents(config: &TraversalConfig) -> Result<String> {
    ContentAssembler::new(config.clone(), Arc::new(SilentSink)).assemble()
}

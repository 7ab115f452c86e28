/*!
 * code2text - Flatten a codebase into a single text document
 *
 * Produces a folder-structure outline followed by the verbatim contents of
 * every file whose name ends with one of the configured suffixes. The input
 * is either a local directory or a remote Git repository cloned on the fly.
 */

pub mod assembler;
pub mod config;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod filter;
pub mod git;
pub mod pipeline;
pub mod source;
pub mod tree;
pub mod types;
pub mod utils;
pub mod walker;
pub mod writer;


// Re-export main components for easier access
pub use assembler::{assemble_contents, ContentAssembler};
pub use config::{Config, TraversalConfig};
pub use diagnostics::{Diagnostic, DiagnosticSink, SilentSink, TracingSink};
pub use document::{compose, generate};
pub use error::{Code2TextError, Result};
pub use source::Source;
pub use tree::{render_tree, TreeRenderer};
pub use types::OutputType;
pub use writer::OutputWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

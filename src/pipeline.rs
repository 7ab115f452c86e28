/*!
 * End-to-end run: validate, resolve the input, build the document, write it
 */

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::diagnostics::DiagnosticSink;
use crate::document;
use crate::error::Result;
use crate::git::ProgressReporter;
use crate::source::Source;
use crate::writer::OutputWriter;

/// Run the whole conversion and return the path that was written.
///
/// A cloned repository is removed before this returns, whether or not the
/// run succeeded.
pub fn run<P: ProgressReporter>(
    config: &Config,
    sink: Arc<dyn DiagnosticSink>,
    progress: Option<&P>,
) -> Result<PathBuf> {
    config.validate()?;

    let source = Source::resolve(&config.input, progress)?;
    let traversal = config.traversal(source.root());

    let text = document::generate(&traversal, sink)?;

    let writer = OutputWriter::new(config.output_type, &config.output_path);
    writer.write(&text)?;

    Ok(writer.path().to_path_buf())
}

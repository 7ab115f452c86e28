/*!
 * Configuration handling for code2text
 */

use std::path::{Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;

use crate::ensure;
use crate::error::Result;
use crate::types::OutputType;

/// Suffix used when no extensions are configured
pub const DEFAULT_EXTENSION: &str = ".py";

/// Command-line arguments for code2text
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "code2text",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate text from a codebase",
    long_about = "Flattens a local folder or a remote Git repository into a single document: \
                  a folder-structure diagram followed by the contents of every matching file."
)]
pub struct Args {
    /// Input path (folder or Git repository URL)
    #[clap(long, required_unless_present = "generate")]
    pub input: Option<String>,

    /// Output file path
    #[clap(long, required_unless_present = "generate")]
    pub output: Option<String>,

    /// Output file type
    #[clap(long, value_enum, default_value_t = OutputType::default())]
    pub output_type: OutputType,

    /// Exclude files under any path component starting with '.' or '__'
    #[clap(long)]
    pub exclude_hidden: bool,

    /// Comma-separated list of file name suffixes to include
    #[clap(long, value_delimiter = ',', default_value = DEFAULT_EXTENSION)]
    pub extensions: Vec<String>,

    /// Show useful information while processing
    #[clap(short, long)]
    pub verbose: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Settings the tree renderer and content assembler read
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraversalConfig {
    /// Directory the walk starts at, kept as given
    pub root: PathBuf,
    /// Skip files under dot- or dunder-prefixed components
    pub exclude_hidden: bool,
    /// Name suffixes a file must end with to be included
    pub file_extensions: Vec<String>,
    /// Emit progress diagnostics
    pub verbose: bool,
}

impl TraversalConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclude_hidden: false,
            file_extensions: vec![DEFAULT_EXTENSION.to_string()],
            verbose: false,
        }
    }

    pub fn exclude_hidden(mut self, exclude_hidden: bool) -> Self {
        self.exclude_hidden = exclude_hidden;
        self
    }

    pub fn file_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Local folder or remote repository URL
    pub input: String,

    /// Where the document is written
    pub output_path: PathBuf,

    /// Output format
    pub output_type: OutputType,

    /// Whether hidden paths are skipped
    pub exclude_hidden: bool,

    /// Inclusion suffixes
    pub file_extensions: Vec<String>,

    /// Verbose diagnostics
    pub verbose: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            input: args.input.unwrap_or_default(),
            output_path: PathBuf::from(args.output.unwrap_or_default()),
            output_type: args.output_type,
            exclude_hidden: args.exclude_hidden,
            file_extensions: args.extensions,
            verbose: args.verbose,
        }
    }

    /// Check everything that can be checked before touching the input
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.input.is_empty(), Config, "Input path cannot be empty.");
        ensure!(
            !self.output_path.as_os_str().is_empty(),
            Config,
            "Output path cannot be empty."
        );

        if let Some(parent) = self.output_path.parent() {
            ensure!(
                parent == Path::new("") || parent.is_dir(),
                Config,
                "Output directory not found: {}",
                parent.display()
            );
        }

        Ok(())
    }

    /// Traversal settings rooted at the resolved input directory
    pub fn traversal(&self, root: impl Into<PathBuf>) -> TraversalConfig {
        TraversalConfig::new(root)
            .exclude_hidden(self.exclude_hidden)
            .file_extensions(self.file_extensions.iter().cloned())
            .verbose(self.verbose)
    }
}

/*!
 * Core types and data structures for code2text
 */

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::Code2TextError;
use crate::filter::extension_of;
use crate::utils::RULE;

/// Kind of file the final document is written as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputType {
    /// Plain text, written verbatim
    #[default]
    Txt,
    /// Word document with the whole text in one paragraph
    Docx,
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputType::Txt => write!(f, "txt"),
            OutputType::Docx => write!(f, "docx"),
        }
    }
}

impl FromStr for OutputType {
    type Err = Code2TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "txt" => Ok(OutputType::Txt),
            "docx" => Ok(OutputType::Docx),
            _ => Err(crate::error!(
                Config,
                "Invalid output type '{}'. Supported types: txt, docx",
                s
            )),
        }
    }
}

/// One entry found while listing a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Path as produced by the walk (the root joined with each name below it)
    pub path: PathBuf,
    /// Depth of the directory containing this entry; the root is 0
    pub level: usize,
    /// Entry name, lossily converted for display
    pub name: String,
    /// False for directories that the walk descends into
    pub is_file: bool,
}

/// A visited directory together with its immediate entries, in walk order
#[derive(Debug, Clone)]
pub struct DirectoryListing {
    /// Directory path as produced by the walk
    pub path: PathBuf,
    /// Depth below the root
    pub level: usize,
    /// Immediate children, sorted by name
    pub entries: Vec<DirectoryEntry>,
}

impl DirectoryListing {
    /// Files directly contained in this directory
    pub fn files(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.entries.iter().filter(|e| e.is_file)
    }

    /// Subdirectories the walk will visit next
    pub fn subdirectories(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.entries.iter().filter(|e| !e.is_file)
    }
}

/// The formatted representation of one qualifying file
#[derive(Debug, Clone, Copy)]
pub struct FileBlock<'a> {
    pub file_path: &'a Path,
    pub extension: &'a str,
    pub raw_content: &'a str,
}

impl<'a> FileBlock<'a> {
    pub fn new(file_path: &'a Path, name: &'a str, raw_content: &'a str) -> Self {
        Self {
            file_path,
            extension: extension_of(name),
            raw_content,
        }
    }
}

impl fmt::Display for FileBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n\n{}\nFile type: {}\n{}\n\n{RULE}\nFile End\n{RULE}\n",
            self.file_path.display(),
            self.extension,
            self.raw_content
        )
    }
}

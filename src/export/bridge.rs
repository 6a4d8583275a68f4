//! Host file capabilities
//!
//! The host may be able to create files natively and to let the user pick a
//! file to import. Both capabilities are optional and resolved once when the
//! bridge is built; callers match on what is present instead of probing.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::{MonetaError, MonetaResult};
use crate::storage::write_text_atomic;

use super::json::ExportDocument;

/// Native file creation
pub trait FileCreator {
    /// Hand a named document to the host for saving
    fn create_file(&self, filename: &str, contents: &str) -> MonetaResult<()>;
}

/// Native file selection
pub trait FilePicker {
    /// Ask the user for a file; `None` means the user cancelled
    fn pick_file(&self) -> MonetaResult<Option<String>>;
}

/// How an export reached the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The host created the file
    Created { filename: String },
    /// No native capability; the caller must offer the document itself
    Fallback(ExportDocument),
}

/// Result of asking the host for an import file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pick {
    Picked(String),
    Cancelled,
    /// No native picker; the caller must obtain the text itself
    Unavailable,
}

/// Optional host capabilities, resolved once at startup
#[derive(Default)]
pub struct PlatformBridge {
    file_creator: Option<Box<dyn FileCreator>>,
    file_picker: Option<Box<dyn FilePicker>>,
}

impl PlatformBridge {
    /// A bridge with no native capabilities
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file_creator(mut self, creator: impl FileCreator + 'static) -> Self {
        self.file_creator = Some(Box::new(creator));
        self
    }

    pub fn with_file_picker(mut self, picker: impl FilePicker + 'static) -> Self {
        self.file_picker = Some(Box::new(picker));
        self
    }

    pub fn can_create_files(&self) -> bool {
        self.file_creator.is_some()
    }

    pub fn can_pick_files(&self) -> bool {
        self.file_picker.is_some()
    }

    /// Deliver an export through the native creator if there is one
    pub fn deliver(&self, document: ExportDocument) -> MonetaResult<Delivery> {
        match &self.file_creator {
            Some(creator) => {
                creator.create_file(&document.filename, &document.contents)?;
                Ok(Delivery::Created {
                    filename: document.filename,
                })
            }
            None => {
                debug!("No native file creation, falling back");
                Ok(Delivery::Fallback(document))
            }
        }
    }

    /// Ask the native picker for import text
    pub fn pick(&self) -> MonetaResult<Pick> {
        match &self.file_picker {
            Some(picker) => Ok(match picker.pick_file()? {
                Some(text) => Pick::Picked(text),
                None => Pick::Cancelled,
            }),
            None => Ok(Pick::Unavailable),
        }
    }
}

/// Creates export files in a fixed directory
#[derive(Debug, Clone)]
pub struct DirectoryFileCreator {
    dir: PathBuf,
}

impl DirectoryFileCreator {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Where a document with this name will be written
    pub fn target(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }
}

impl FileCreator for DirectoryFileCreator {
    fn create_file(&self, filename: &str, contents: &str) -> MonetaResult<()> {
        let path = self.target(filename);
        write_text_atomic(&path, contents)
            .map_err(|e| MonetaError::Platform(format!("Failed to create {}: {}", path.display(), e)))?;
        info!(path = %path.display(), "Export written");
        Ok(())
    }
}

/// Reads import text from a path chosen up front (e.g. on the command line)
#[derive(Debug, Clone)]
pub struct PathFilePicker {
    path: Option<PathBuf>,
}

impl PathFilePicker {
    /// `None` behaves like a cancelled selection
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl FilePicker for PathFilePicker {
    fn pick_file(&self) -> MonetaResult<Option<String>> {
        let Some(path) = &self.path else {
            return Ok(None);
        };

        fs::read_to_string(path).map(Some).map_err(|e| {
            MonetaError::Platform(format!("Failed to read {}: {}", path.display(), e))
        })
    }
}

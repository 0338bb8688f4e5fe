//! Error types for gengar-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using gengar-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between the wizard and the written project tree
#[derive(Error, Debug)]
pub enum Error {
    /// Catalog has no steps at all
    #[error("Option catalog has no steps")]
    EmptyCatalog,

    /// A step was declared without any selectable options
    #[error("Step '{label}' has no options")]
    EmptyStep { label: String },

    /// Two steps share a label, so their selections would collide
    #[error("Step '{label}' is declared more than once")]
    DuplicateStep { label: String },

    /// Project name cannot be used as a directory name
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: &'static str },

    /// User quit the wizard before confirming the final step
    #[error("Setup cancelled.")]
    WizardCancelled,

    /// Selection snapshot requested while the wizard is still running
    #[error("Wizard has not finished yet")]
    WizardIncomplete,

    /// A value supplied for a step is not one of its options
    #[error("Unknown {step} '{value}'. Available: {available}")]
    UnknownOption {
        step: &'static str,
        value: String,
        available: String,
    },

    /// Template asset absent from the template directory
    #[error("Template not found: {name} (looked in {})", path.display())]
    TemplateAssetMissing { name: String, path: PathBuf },

    /// Template asset exists but could not be parsed or rendered
    #[error("Template {name} could not be rendered: {source}")]
    TemplateInvalid {
        name: String,
        #[source]
        source: tera::Error,
    },

    /// Filesystem operation failed for the given path
    #[error("Failed to write {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Script name would escape the scripts directory
    #[error("Invalid script name: {name}")]
    InvalidScriptName { name: String },

    /// No script with that name in the scripts directory
    #[error("Command not found: {name} (no script at {})", path.display())]
    ScriptNotFound { name: String, path: PathBuf },

    /// Script failed to load or raised an error while running
    #[error("Error executing script {name}: {reason}")]
    ScriptFailed { name: String, reason: String },
}

impl Error {
    /// Wrap an I/O error with the path it happened on
    pub(crate) fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}

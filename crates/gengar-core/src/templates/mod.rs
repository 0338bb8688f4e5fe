//! Template resolution and rendering
//!
//! This module provides:
//! - The resolver table mapping build system + test framework to template assets
//! - The template store that loads and renders those assets
//! - The fixed example and unit test sources

pub mod resolver;
pub mod sources;
pub mod store;

pub use resolver::{
    compiler_executable, resolve, sanitize_identifier, ArtifactTemplates, Resolution,
    TemplateBinding, TemplateData, TestSource, ARTIFACT_TABLE,
};
pub use sources::{EXAMPLE_FILES, LIBRARY_NAME, SKELETON_DIRS, TESTS_DIR};
pub use store::TemplateStore;

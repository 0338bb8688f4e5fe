//! Gengar Core - scaffolding for C++ projects
//!
//! A short wizard asks for a build system, language standard, compiler and
//! test framework; the answers are turned into a project tree with example
//! sources and a matching build file.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Selection** - `wizard` (catalog + stepper) and `selection` (typed model)
//! - **Layer 2: Generation** - `templates` (resolver table, asset store) and `compose`
//! - **Layer 3: CLI/TUI Interface** - terminal wizard driver and cliclack prompts (feature-gated)
//!
//! Unknown commands are routed to extension scripts via `scripts`.
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the terminal wizard and cliclack prompts
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use gengar_core::{BuildSystem, CppStandard, ProjectComposer, SelectionModel, TemplateStore};
//!
//! let selection = SelectionModel::new("demo")?
//!     .with_build_system(BuildSystem::CMake)
//!     .with_standard(CppStandard::Cpp20);
//! let composer = ProjectComposer::new(TemplateStore::locate(None), ".");
//! let tree = composer.compose(&selection).await?;
//! ```

pub mod compose;
pub mod config;
pub mod error;
pub mod scripts;
pub mod selection;
pub mod templates;
pub mod wizard;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use compose::{ProjectComposer, ProjectTree};
pub use error::{Error, Result};
pub use scripts::{LuaRuntime, ScriptHost, ScriptRuntime};
pub use selection::{BuildSystem, Compiler, CppStandard, SelectionModel, TestingFramework};
pub use templates::TemplateStore;
pub use wizard::{Catalog, WizardState};

#[cfg(feature = "tui")]
pub use tui::run;

/// One-line usage summary
pub const USAGE: &str = "Usage: gengar [init] <project-name>";

//! Ordered option catalog presented by the wizard

use crate::error::{Error, Result};
use std::collections::HashSet;

pub const BUILD_SYSTEM: &str = "Build System";
pub const CPP_STANDARD: &str = "C++ Standard";
pub const COMPILER: &str = "Compiler";
pub const TESTING_FRAMEWORK: &str = "Testing Framework";

/// One configuration dimension and its selectable values, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    label: String,
    options: Vec<String>,
}

impl Step {
    pub fn new(label: impl Into<String>, options: &[&str]) -> Self {
        Self {
            label: label.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Position of an option in this step, if present
    pub fn position(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o == value)
    }
}

/// Immutable, validated list of steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    steps: Vec<Step>,
}

impl Catalog {
    /// Build a catalog, rejecting empty step lists, empty option lists and
    /// duplicate labels
    pub fn new(steps: Vec<Step>) -> Result<Self> {
        if steps.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for step in &steps {
            if step.options.is_empty() {
                return Err(Error::EmptyStep {
                    label: step.label.clone(),
                });
            }
            if !seen.insert(step.label.as_str()) {
                return Err(Error::DuplicateStep {
                    label: step.label.clone(),
                });
            }
        }

        Ok(Self { steps })
    }

    /// The four steps gengar asks about
    pub fn builtin() -> Self {
        Self {
            steps: vec![
                Step::new(
                    BUILD_SYSTEM,
                    &["Premake5", "Makefile", "CMake", "build.sh", "None"],
                ),
                Step::new(CPP_STANDARD, &["c++17", "c++20", "c++23"]),
                Step::new(COMPILER, &["GCC", "Clang", "MSVC"]),
                Step::new(TESTING_FRAMEWORK, &["Google Test", "Catch2", "None"]),
            ],
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn find(&self, label: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.label == label)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

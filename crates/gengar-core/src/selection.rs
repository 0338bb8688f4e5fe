//! Typed selections and the finalized selection model

use crate::error::{Error, Result};
use crate::templates::LIBRARY_NAME;
use crate::wizard::catalog::{BUILD_SYSTEM, COMPILER, CPP_STANDARD, TESTING_FRAMEWORK};
use crate::wizard::Selections;
use std::fmt;
use std::str::FromStr;

/// Build system that drives the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuildSystem {
    Premake5,
    Makefile,
    CMake,
    BuildSh,
    #[default]
    None,
}

/// C++ language standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CppStandard {
    #[default]
    Cpp17,
    Cpp20,
    Cpp23,
}

/// Compiler toolchain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compiler {
    Gcc,
    Clang,
    Msvc,
}

/// Unit test framework wired into the build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TestingFramework {
    GoogleTest,
    Catch2,
    #[default]
    None,
}

impl BuildSystem {
    pub const ALL: [BuildSystem; 5] = [
        BuildSystem::Premake5,
        BuildSystem::Makefile,
        BuildSystem::CMake,
        BuildSystem::BuildSh,
        BuildSystem::None,
    ];

    /// Catalog label
    pub fn label(&self) -> &'static str {
        match self {
            BuildSystem::Premake5 => "Premake5",
            BuildSystem::Makefile => "Makefile",
            BuildSystem::CMake => "CMake",
            BuildSystem::BuildSh => "build.sh",
            BuildSystem::None => "None",
        }
    }

    fn from_alias(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "premake5" | "premake" => Some(BuildSystem::Premake5),
            "makefile" | "make" => Some(BuildSystem::Makefile),
            "cmake" => Some(BuildSystem::CMake),
            "build.sh" | "buildsh" | "sh" => Some(BuildSystem::BuildSh),
            "none" => Some(BuildSystem::None),
            _ => None,
        }
    }
}

impl CppStandard {
    pub const ALL: [CppStandard; 3] = [CppStandard::Cpp17, CppStandard::Cpp20, CppStandard::Cpp23];

    pub fn label(&self) -> &'static str {
        match self {
            CppStandard::Cpp17 => "c++17",
            CppStandard::Cpp20 => "c++20",
            CppStandard::Cpp23 => "c++23",
        }
    }

    /// Numeric part of the standard (`c++20` -> `20`)
    pub fn suffix(&self) -> &'static str {
        let label = self.label();
        label.strip_prefix("c++").unwrap_or(label)
    }

    fn from_alias(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        let digits = lower
            .strip_prefix("c++")
            .or_else(|| lower.strip_prefix("cpp"))
            .unwrap_or(&lower);
        match digits {
            "17" => Some(CppStandard::Cpp17),
            "20" => Some(CppStandard::Cpp20),
            "23" => Some(CppStandard::Cpp23),
            _ => None,
        }
    }
}

impl Compiler {
    pub const ALL: [Compiler; 3] = [Compiler::Gcc, Compiler::Clang, Compiler::Msvc];

    pub fn label(&self) -> &'static str {
        match self {
            Compiler::Gcc => "GCC",
            Compiler::Clang => "Clang",
            Compiler::Msvc => "MSVC",
        }
    }

    fn from_alias(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gcc" | "g++" => Some(Compiler::Gcc),
            "clang" | "clang++" => Some(Compiler::Clang),
            "msvc" | "cl" => Some(Compiler::Msvc),
            _ => None,
        }
    }
}

impl TestingFramework {
    pub const ALL: [TestingFramework; 3] = [
        TestingFramework::GoogleTest,
        TestingFramework::Catch2,
        TestingFramework::None,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TestingFramework::GoogleTest => "Google Test",
            TestingFramework::Catch2 => "Catch2",
            TestingFramework::None => "None",
        }
    }

    fn from_alias(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "google test" | "googletest" | "gtest" => Some(TestingFramework::GoogleTest),
            "catch2" | "catch" => Some(TestingFramework::Catch2),
            "none" => Some(TestingFramework::None),
            _ => None,
        }
    }
}

macro_rules! label_impls {
    ($ty:ty, $step:expr) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                <$ty>::from_alias(s.trim()).ok_or_else(|| Error::UnknownOption {
                    step: $step,
                    value: s.to_string(),
                    available: <$ty>::ALL
                        .iter()
                        .map(|v| v.label())
                        .collect::<Vec<_>>()
                        .join(", "),
                })
            }
        }
    };
}

label_impls!(BuildSystem, BUILD_SYSTEM);
label_impls!(CppStandard, CPP_STANDARD);
label_impls!(Compiler, COMPILER);
label_impls!(TestingFramework, TESTING_FRAMEWORK);

/// Parse a recorded selection, falling back to the default for unknown labels
fn parse_or_default<T>(selections: &Selections, step: &str) -> Option<T>
where
    T: FromStr<Err = Error>,
{
    let value = selections.get(step)?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!(step, value = %value, "unsupported selection, using default");
            None
        }
    }
}

/// Snapshot of the choices driving generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionModel {
    pub project_name: String,
    pub build_system: BuildSystem,
    /// Unselected standard renders as the catalog's first option
    pub cpp_standard: Option<CppStandard>,
    /// Unselected compiler resolves to `g++`
    pub compiler: Option<Compiler>,
    pub testing_framework: TestingFramework,
}

impl SelectionModel {
    /// Empty selection set for a project; every artifact-driving field is `None`
    pub fn new(project_name: &str) -> Result<Self> {
        validate_project_name(project_name)?;
        Ok(Self {
            project_name: project_name.to_string(),
            build_system: BuildSystem::None,
            cpp_standard: None,
            compiler: None,
            testing_framework: TestingFramework::None,
        })
    }

    /// Build the model from an accepted wizard run's selections
    pub fn from_selections(project_name: &str, selections: &Selections) -> Result<Self> {
        let mut model = Self::new(project_name)?;
        model.build_system = parse_or_default(selections, BUILD_SYSTEM).unwrap_or_default();
        model.cpp_standard = parse_or_default(selections, CPP_STANDARD);
        model.compiler = parse_or_default(selections, COMPILER);
        model.testing_framework =
            parse_or_default(selections, TESTING_FRAMEWORK).unwrap_or_default();
        Ok(model)
    }

    pub fn with_build_system(mut self, build_system: BuildSystem) -> Self {
        self.build_system = build_system;
        self
    }

    pub fn with_standard(mut self, standard: CppStandard) -> Self {
        self.cpp_standard = Some(standard);
        self
    }

    pub fn with_compiler(mut self, compiler: Compiler) -> Self {
        self.compiler = Some(compiler);
        self
    }

    pub fn with_testing(mut self, framework: TestingFramework) -> Self {
        self.testing_framework = framework;
        self
    }

    pub fn standard(&self) -> CppStandard {
        self.cpp_standard.unwrap_or_default()
    }
}

fn validate_project_name(name: &str) -> Result<()> {
    let invalid = |reason| {
        Err(Error::InvalidProjectName {
            name: name.to_string(),
            reason,
        })
    };

    if name.trim().is_empty() {
        return invalid("name is empty");
    }
    if name == "." || name == ".." {
        return invalid("name must not be a relative directory reference");
    }
    if name.contains('/') || name.contains('\\') {
        return invalid("name must not contain path separators");
    }
    if name.trim() != name {
        return invalid("name must not start or end with whitespace");
    }
    if name == LIBRARY_NAME {
        return invalid("name is reserved for the example library");
    }
    Ok(())
}

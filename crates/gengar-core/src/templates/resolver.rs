//! Maps a selection model to the template fragments that make up its build file
//!
//! Resolution is pure: the same `SelectionModel` always yields the same
//! fragment list and the same render data.

use crate::selection::{BuildSystem, Compiler, SelectionModel, TestingFramework};
use crate::templates::sources::{self, LIBRARY_NAME};
use serde::Serialize;

/// Template assets for one build system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactTemplates {
    pub build_system: BuildSystem,
    /// File written at the project root
    pub file_name: &'static str,
    pub base: &'static str,
    pub google_test: &'static str,
    pub catch2: &'static str,
    /// Template expects a bare identifier, so spaces in the project name are replaced
    pub bare_identifier: bool,
    /// Whether the compiler selection reaches the generated file
    pub uses_compiler: bool,
}

/// The full compatibility matrix: one row per supported build system
pub const ARTIFACT_TABLE: [ArtifactTemplates; 4] = [
    ArtifactTemplates {
        build_system: BuildSystem::Premake5,
        file_name: "premake5.lua",
        base: "premake5.lua.tmpl",
        google_test: "premake5GTest.tmpl",
        catch2: "premake5Catch2.tmpl",
        bare_identifier: false,
        uses_compiler: false,
    },
    ArtifactTemplates {
        build_system: BuildSystem::Makefile,
        file_name: "Makefile",
        base: "Makefile.tmpl",
        google_test: "MakefileGTest.tmpl",
        catch2: "MakefileCatch2.tmpl",
        bare_identifier: true,
        uses_compiler: true,
    },
    ArtifactTemplates {
        build_system: BuildSystem::CMake,
        file_name: "CMakeLists.txt",
        base: "CMakeLists.tmpl",
        google_test: "CMakeListsGTest.tmpl",
        catch2: "CMakeListsCatch2.tmpl",
        bare_identifier: true,
        uses_compiler: false,
    },
    ArtifactTemplates {
        build_system: BuildSystem::BuildSh,
        file_name: "build.sh",
        base: "build.sh.tmpl",
        google_test: "buildGTest.tmpl",
        catch2: "buildCatch2.tmpl",
        bare_identifier: false,
        uses_compiler: true,
    },
];

impl ArtifactTemplates {
    pub fn lookup(build_system: BuildSystem) -> Option<&'static ArtifactTemplates> {
        ARTIFACT_TABLE
            .iter()
            .find(|row| row.build_system == build_system)
    }

    /// Augmentation template for a framework, `None` when no tests are wanted
    pub fn augmentation(&self, framework: TestingFramework) -> Option<&'static str> {
        match framework {
            TestingFramework::GoogleTest => Some(self.google_test),
            TestingFramework::Catch2 => Some(self.catch2),
            TestingFramework::None => None,
        }
    }
}

/// Values every template may reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateData {
    pub project_name: String,
    pub library: &'static str,
    /// Full standard token, e.g. `c++20`
    pub cpp_standard: &'static str,
    /// Numeric standard, e.g. `20`
    pub std_suffix: &'static str,
    /// Uppercased standard, e.g. `C++20`
    pub std_upper: String,
    /// Compiler executable, e.g. `clang++`
    pub compiler: &'static str,
}

/// A template paired with the data it is rendered with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBinding {
    pub template: &'static str,
    pub data: TemplateData,
}

/// A test source file to materialize before the build file is rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSource {
    pub relative_path: String,
    pub content: &'static str,
}

/// Everything needed to produce one build artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub file_name: &'static str,
    /// Base first, then the optional augmentation
    pub bindings: Vec<TemplateBinding>,
    pub test_source: Option<TestSource>,
    pub uses_compiler: bool,
}

/// Compiler executable for a selection; anything unselected builds with `g++`
pub fn compiler_executable(compiler: Option<Compiler>) -> &'static str {
    match compiler {
        Some(Compiler::Gcc) => "g++",
        Some(Compiler::Clang) => "clang++",
        Some(Compiler::Msvc) => "cl",
        None => "g++",
    }
}

/// Replace spaces for templates that need a bare identifier
pub fn sanitize_identifier(name: &str) -> String {
    name.replace(' ', "_")
}

/// Resolve the build artifact for a selection, or `None` when no build system applies
pub fn resolve(selection: &SelectionModel) -> Option<Resolution> {
    let row = ArtifactTemplates::lookup(selection.build_system)?;
    let standard = selection.standard();

    let project_name = if row.bare_identifier {
        sanitize_identifier(&selection.project_name)
    } else {
        selection.project_name.clone()
    };

    let data = TemplateData {
        project_name,
        library: LIBRARY_NAME,
        cpp_standard: standard.label(),
        std_suffix: standard.suffix(),
        std_upper: standard.label().to_uppercase(),
        compiler: compiler_executable(selection.compiler),
    };

    let mut bindings = vec![TemplateBinding {
        template: row.base,
        data: data.clone(),
    }];
    if let Some(template) = row.augmentation(selection.testing_framework) {
        bindings.push(TemplateBinding { template, data });
    }

    Some(Resolution {
        file_name: row.file_name,
        bindings,
        test_source: sources::test_source(selection.testing_framework),
        uses_compiler: row.uses_compiler,
    })
}

//! Project composition: directory skeleton, example sources and the build file
//!
//! Composition is not transactional. A failure aborts the remaining steps
//! and leaves already-written files in place. Re-running overwrites files
//! but never removes ones a previous run wrote.

use crate::error::{Error, Result};
use crate::selection::{BuildSystem, SelectionModel};
use crate::templates::resolver::{self, Resolution};
use crate::templates::sources::{EXAMPLE_FILES, SKELETON_DIRS};
use crate::templates::store::TemplateStore;
use std::path::{Path, PathBuf};
use tokio::fs;

/// What a composition run wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTree {
    /// Project root directory
    pub root: PathBuf,
    /// Files written, relative to `root`, in write order
    pub files: Vec<PathBuf>,
    /// Build file relative to `root`, if a build system was selected
    pub build_file: Option<PathBuf>,
}

impl ProjectTree {
    fn new(root: PathBuf) -> Self {
        Self {
            root,
            files: Vec::new(),
            build_file: None,
        }
    }
}

/// Writes a project tree for a selection model
#[derive(Debug, Clone)]
pub struct ProjectComposer {
    store: TemplateStore,
    parent_dir: PathBuf,
}

impl ProjectComposer {
    /// Compose projects under `parent_dir` using templates from `store`
    pub fn new(store: TemplateStore, parent_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            parent_dir: parent_dir.into(),
        }
    }

    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// Root directory a selection's project will be written to
    pub fn project_root(&self, selection: &SelectionModel) -> PathBuf {
        self.parent_dir.join(&selection.project_name)
    }

    /// Create the project tree for a selection
    pub async fn compose(&self, selection: &SelectionModel) -> Result<ProjectTree> {
        let mut tree = ProjectTree::new(self.project_root(selection));

        create_skeleton(&tree.root).await?;

        for (relative, content) in EXAMPLE_FILES {
            write_file(&mut tree, relative, content).await?;
        }

        match resolver::resolve(selection) {
            Some(resolution) => self.write_build_file(&mut tree, selection, &resolution).await?,
            None => {
                tracing::warn!(
                    build_system = %selection.build_system,
                    "no build system selected, skipping build file"
                );
            }
        }

        Ok(tree)
    }

    async fn write_build_file(
        &self,
        tree: &mut ProjectTree,
        selection: &SelectionModel,
        resolution: &Resolution,
    ) -> Result<()> {
        if !resolution.uses_compiler && selection.compiler.is_some() {
            tracing::info!(
                build_system = %selection.build_system,
                "compiler selection is not used by this build system"
            );
        }

        if let Some(test_source) = &resolution.test_source {
            write_file(tree, &test_source.relative_path, test_source.content).await?;
        }

        let content = self.store.render_all(&resolution.bindings).await?;
        let path = write_file(tree, resolution.file_name, &content).await?;
        tree.build_file = Some(PathBuf::from(resolution.file_name));

        if selection.build_system == BuildSystem::BuildSh {
            make_executable(&path).await?;
        }

        Ok(())
    }
}

async fn create_skeleton(root: &Path) -> Result<()> {
    for dir in SKELETON_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .await
            .map_err(|e| Error::fs(&path, e))?;
    }
    Ok(())
}

/// Write a file under the project root, creating parent directories
async fn write_file(tree: &mut ProjectTree, relative: &str, content: &str) -> Result<PathBuf> {
    let path = tree.root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::fs(parent, e))?;
    }

    fs::write(&path, content)
        .await
        .map_err(|e| Error::fs(&path, e))?;
    tracing::debug!(path = %path.display(), "wrote file");

    tree.files.push(PathBuf::from(relative));
    Ok(path)
}

#[cfg(unix)]
async fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .await
        .map_err(|e| Error::fs(path, e))
}

#[cfg(not(unix))]
async fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{CppStandard, TestingFramework};

    fn fixture_templates() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for row in resolver::ARTIFACT_TABLE {
            std::fs::write(dir.path().join(row.base), "base {{ project_name }}\n").unwrap();
            std::fs::write(dir.path().join(row.google_test), "gtest {{ library }}\n").unwrap();
            std::fs::write(dir.path().join(row.catch2), "catch2 {{ library }}\n").unwrap();
        }
        dir
    }

    fn selection(build_system: BuildSystem, testing: TestingFramework) -> SelectionModel {
        SelectionModel::new("demo")
            .unwrap()
            .with_build_system(build_system)
            .with_standard(CppStandard::Cpp20)
            .with_testing(testing)
    }

    #[tokio::test]
    async fn test_skeleton_and_examples_written() {
        let templates = fixture_templates();
        let out = tempfile::tempdir().unwrap();
        let composer = ProjectComposer::new(TemplateStore::new(templates.path()), out.path());

        let tree = composer
            .compose(&selection(BuildSystem::Makefile, TestingFramework::None))
            .await
            .unwrap();

        assert_eq!(tree.root, out.path().join("demo"));
        for dir in SKELETON_DIRS {
            assert!(tree.root.join(dir).is_dir(), "missing {dir}");
        }
        for (relative, _) in EXAMPLE_FILES {
            assert!(tree.root.join(relative).is_file(), "missing {relative}");
        }
        assert_eq!(tree.build_file, Some(PathBuf::from("Makefile")));
        assert_eq!(tree.files.len(), EXAMPLE_FILES.len() + 1);
    }

    #[tokio::test]
    async fn test_no_tests_dir_without_framework() {
        let templates = fixture_templates();
        let out = tempfile::tempdir().unwrap();
        let composer = ProjectComposer::new(TemplateStore::new(templates.path()), out.path());

        let tree = composer
            .compose(&selection(BuildSystem::CMake, TestingFramework::None))
            .await
            .unwrap();

        assert!(!tree.root.join("tests").exists());
    }

    #[tokio::test]
    async fn test_framework_adds_test_source_and_augmentation() {
        let templates = fixture_templates();
        let out = tempfile::tempdir().unwrap();
        let composer = ProjectComposer::new(TemplateStore::new(templates.path()), out.path());

        let tree = composer
            .compose(&selection(BuildSystem::Premake5, TestingFramework::Catch2))
            .await
            .unwrap();

        let tests: Vec<_> = std::fs::read_dir(tree.root.join("tests/unit-tests"))
            .unwrap()
            .collect();
        assert_eq!(tests.len(), 1);

        let build = std::fs::read_to_string(tree.root.join("premake5.lua")).unwrap();
        let base = build.find("base demo").unwrap();
        let augmentation = build.find("catch2 foo").unwrap();
        assert!(base < augmentation);
    }

    #[tokio::test]
    async fn test_missing_build_system_still_succeeds() {
        let templates = fixture_templates();
        let out = tempfile::tempdir().unwrap();
        let composer = ProjectComposer::new(TemplateStore::new(templates.path()), out.path());

        let tree = composer
            .compose(&selection(BuildSystem::None, TestingFramework::GoogleTest))
            .await
            .unwrap();

        assert!(tree.build_file.is_none());
        assert_eq!(tree.files.len(), EXAMPLE_FILES.len());
        assert!(tree.root.join("src/main.cpp").is_file());
    }

    #[tokio::test]
    async fn test_missing_template_aborts_after_examples() {
        let templates = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let composer = ProjectComposer::new(TemplateStore::new(templates.path()), out.path());

        let err = composer
            .compose(&selection(BuildSystem::CMake, TestingFramework::GoogleTest))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::TemplateAssetMissing { .. }));
        // Earlier steps stay on disk
        let root = out.path().join("demo");
        assert!(root.join("src/main.cpp").is_file());
        assert!(root.join("tests/unit-tests/foo-tests.cpp").is_file());
        assert!(!root.join("CMakeLists.txt").exists());
    }

    #[tokio::test]
    async fn test_recompose_leaves_old_build_file() {
        let templates = fixture_templates();
        let out = tempfile::tempdir().unwrap();
        let composer = ProjectComposer::new(TemplateStore::new(templates.path()), out.path());

        composer
            .compose(&selection(BuildSystem::Makefile, TestingFramework::None))
            .await
            .unwrap();
        let tree = composer
            .compose(&selection(BuildSystem::CMake, TestingFramework::None))
            .await
            .unwrap();

        assert!(tree.root.join("CMakeLists.txt").is_file());
        assert!(tree.root.join("Makefile").is_file());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_build_script_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let templates = fixture_templates();
        let out = tempfile::tempdir().unwrap();
        let composer = ProjectComposer::new(TemplateStore::new(templates.path()), out.path());

        let tree = composer
            .compose(&selection(BuildSystem::BuildSh, TestingFramework::None))
            .await
            .unwrap();

        let mode = std::fs::metadata(tree.root.join("build.sh"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_unwritable_parent_reports_path() {
        use std::os::unix::fs::PermissionsExt;

        let templates = fixture_templates();
        let out = tempfile::tempdir().unwrap();
        let locked = out.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o500)).unwrap();

        // Root ignores permission bits
        if std::fs::write(locked.join("probe"), "").is_ok() {
            return;
        }

        let composer = ProjectComposer::new(TemplateStore::new(templates.path()), &locked);
        let err = composer
            .compose(&selection(BuildSystem::CMake, TestingFramework::None))
            .await
            .unwrap_err();

        match err {
            Error::Filesystem { path, .. } => assert!(path.starts_with(&locked)),
            other => panic!("expected Filesystem error, got {:?}", other),
        }
    }
}

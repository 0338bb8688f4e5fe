//! Charm-style `init` flow using cliclack

use crate::compose::{ProjectComposer, ProjectTree};
use crate::error::Error;
use crate::selection::{BuildSystem, Compiler, CppStandard, SelectionModel, TestingFramework};
use crate::templates::{TemplateStore, LIBRARY_NAME};
use crate::tui::wizard;
use crate::wizard::catalog::{BUILD_SYSTEM, COMPILER, CPP_STANDARD, TESTING_FRAMEWORK};
use crate::wizard::{Catalog, Selections, Step};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Arguments for the init command
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Project directory name, created under `directory`
    pub project_name: String,

    /// Parent directory for the project (defaults to the working directory)
    pub directory: Option<PathBuf>,

    /// Template directory override
    pub template_dir: Option<PathBuf>,

    pub build_system: Option<BuildSystem>,
    pub standard: Option<CppStandard>,
    pub compiler: Option<Compiler>,
    pub testing: Option<TestingFramework>,

    /// Take defaults for anything not given instead of asking
    pub yes: bool,
}

impl InitArgs {
    /// Flag value for a step, as the catalog label
    fn preset(&self, step: &str) -> Option<&'static str> {
        match step {
            BUILD_SYSTEM => self.build_system.map(|v| v.label()),
            CPP_STANDARD => self.standard.map(|v| v.label()),
            COMPILER => self.compiler.map(|v| v.label()),
            TESTING_FRAMEWORK => self.testing.map(|v| v.label()),
            _ => None,
        }
    }
}

/// Run the interactive init flow: wizard, composition, next steps
pub async fn run(args: InitArgs) -> Result<ProjectTree> {
    cliclack::intro("gengar")?;

    let selection = select_options(&args)?;

    let store = TemplateStore::locate(args.template_dir.as_deref());
    cliclack::log::info(format!("Using templates from {}", store.dir().display()))?;

    let parent = match &args.directory {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    let composer = ProjectComposer::new(store, parent);

    let tree = create_project(&composer, &selection).await?;
    print_next_steps(&tree, &selection)?;

    Ok(tree)
}

/// Collect selections from flags, asking only for the steps flags leave open
fn select_options(args: &InitArgs) -> Result<SelectionModel> {
    let builtin = Catalog::builtin();
    let mut selections = Selections::new();
    let mut open_steps: Vec<Step> = Vec::new();

    for step in builtin.steps() {
        match args.preset(step.label()) {
            Some(value) => {
                selections.insert(step.label().to_string(), value.to_string());
            }
            None => open_steps.push(step.clone()),
        }
    }

    if !open_steps.is_empty() && !args.yes {
        let catalog = Catalog::new(open_steps)?;
        let term = console::Term::stderr();
        if !term.is_term() {
            anyhow::bail!(
                "Interactive terminal required. Pass --build-system, --std, --compiler and --testing, or --yes for defaults."
            );
        }

        let state = wizard::run_wizard(&catalog, &term)?;
        let answered = match state.into_selections() {
            Ok(answered) => answered,
            Err(Error::WizardCancelled) => {
                cliclack::outro_cancel("Setup cancelled.")?;
                return Err(Error::WizardCancelled.into());
            }
            Err(e) => return Err(e.into()),
        };
        selections.extend(answered);
    }

    let selection = SelectionModel::from_selections(&args.project_name, &selections)?;
    cliclack::log::success(summary(&selection))?;
    Ok(selection)
}

fn summary(selection: &SelectionModel) -> String {
    let compiler = selection
        .compiler
        .map(|c| c.label())
        .unwrap_or("default");
    format!(
        "{}: {}, {}, {}, tests: {}",
        selection.project_name,
        selection.build_system,
        selection.standard(),
        compiler,
        selection.testing_framework
    )
}

async fn create_project(
    composer: &ProjectComposer,
    selection: &SelectionModel,
) -> Result<ProjectTree> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    match composer.compose(selection).await {
        Ok(tree) => {
            spinner.stop(format!(
                "Created {} files in {}",
                tree.files.len(),
                tree.root.display()
            ));
            if tree.build_file.is_none() {
                cliclack::log::warning("No build system selected, no build file written")?;
            }
            cliclack::log::success("Project created successfully")?;
            Ok(tree)
        }
        Err(e) => {
            spinner.stop("Failed to create project");
            Err(e.into())
        }
    }
}

/// Commands to build (and test) the generated project
pub fn next_steps(root: &Path, current: Option<&Path>, selection: &SelectionModel) -> Vec<String> {
    let mut steps = Vec::new();

    if current != Some(root) {
        steps.push(format!("cd {}", root.display()));
    }

    let has_tests = selection.testing_framework != TestingFramework::None;
    match selection.build_system {
        BuildSystem::CMake => {
            steps.push("cmake -S . -B build && cmake --build build".to_string());
            if has_tests {
                steps.push("ctest --test-dir build".to_string());
            }
        }
        BuildSystem::Makefile => {
            steps.push("make".to_string());
            if has_tests {
                steps.push("make test".to_string());
            }
        }
        BuildSystem::BuildSh => {
            steps.push("./build.sh".to_string());
            if has_tests {
                steps.push(format!("./build/{}-tests", LIBRARY_NAME));
            }
        }
        BuildSystem::Premake5 => {
            steps.push("premake5 gmake2 && make -C build".to_string());
            if has_tests {
                steps.push(format!("./build/bin/Debug/{}-tests", LIBRARY_NAME));
            }
        }
        BuildSystem::None => {
            steps.push("Add a build file for src/ and include/".to_string());
        }
    }

    steps
}

fn print_next_steps(tree: &ProjectTree, selection: &SelectionModel) -> Result<()> {
    let current = std::env::current_dir().ok();
    let steps = next_steps(&tree.root, current.as_deref(), selection);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}

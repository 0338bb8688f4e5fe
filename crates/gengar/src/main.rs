//! Gengar CLI - C++ project scaffolding
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Usage error
//! - 3: Extension script not found
//! - 4: Extension script failed
//! - 130: Cancelled

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use gengar_core::tui::InitArgs;
use gengar_core::{
    BuildSystem, Compiler, CppStandard, ScriptHost, TestingFramework, USAGE,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// CLI exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const GENERAL_ERROR: u8 = 1;
    pub const USAGE: u8 = 2;
    pub const SCRIPT_NOT_FOUND: u8 = 3;
    pub const SCRIPT_FAILED: u8 = 4;
    pub const CANCELLED: u8 = 130;
}

#[derive(Parser, Debug)]
#[command(name = "gengar")]
#[command(about = "Scaffold C++ projects with your choice of build system, standard, compiler and test framework")]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new C++ project
    Init(CliInitArgs),
    /// Show usage
    Help,
    /// Run an extension script from the scripts directory
    #[command(external_subcommand)]
    Script(Vec<String>),
}

#[derive(Args, Debug)]
pub struct CliInitArgs {
    /// Name of the project directory to create
    pub project_name: String,

    /// Parent directory to create the project in
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Local directory to read templates from
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Build system (premake5, makefile, cmake, build.sh, none)
    #[arg(short, long)]
    pub build_system: Option<BuildSystem>,

    /// C++ standard (c++17, c++20, c++23)
    #[arg(short, long = "std")]
    pub standard: Option<CppStandard>,

    /// Compiler (gcc, clang, msvc)
    #[arg(short, long)]
    pub compiler: Option<Compiler>,

    /// Testing framework (gtest, catch2, none)
    #[arg(short, long)]
    pub testing: Option<TestingFramework>,

    /// Use defaults for anything not given instead of asking
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliInitArgs> for InitArgs {
    fn from(args: CliInitArgs) -> Self {
        InitArgs {
            project_name: args.project_name,
            directory: args.directory,
            template_dir: args.template_dir,
            build_system: args.build_system,
            standard: args.standard,
            compiler: args.compiler,
            testing: args.testing,
            yes: args.yes,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init();
}

fn show_usage() {
    println!("{}", USAGE);
}

fn run_script(words: Vec<String>) -> Result<()> {
    let mut words = words.into_iter();
    let Some(name) = words.next() else {
        show_usage();
        return Ok(());
    };

    let host = ScriptHost::locate();
    host.invoke(&name, words)?;
    Ok(())
}

/// Map an error to an exit code
fn exit_code_for(e: &anyhow::Error) -> u8 {
    match e.downcast_ref::<gengar_core::Error>() {
        Some(gengar_core::Error::WizardCancelled) => ExitCodes::CANCELLED,
        Some(gengar_core::Error::ScriptNotFound { .. })
        | Some(gengar_core::Error::InvalidScriptName { .. }) => ExitCodes::SCRIPT_NOT_FOUND,
        Some(gengar_core::Error::ScriptFailed { .. }) => ExitCodes::SCRIPT_FAILED,
        Some(gengar_core::Error::InvalidProjectName { .. })
        | Some(gengar_core::Error::UnknownOption { .. }) => ExitCodes::USAGE,
        _ => ExitCodes::GENERAL_ERROR,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(i32::from(ExitCodes::CANCELLED));
    })
    .ok();

    init_logging();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "dispatching");

    let result = match cli.command {
        Some(Command::Init(init_args)) => {
            let result = gengar_core::run(init_args.into()).await.map(|_| ());

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        Some(Command::Help) => {
            show_usage();
            Ok(())
        }
        Some(Command::Script(words)) => run_script(words),
        None => {
            show_usage();
            return ExitCode::from(ExitCodes::USAGE);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = exit_code_for(&e);
            if code == ExitCodes::SCRIPT_NOT_FOUND {
                eprintln!("{} {:#}", "Error:".red(), e);
                show_usage();
            } else if code != ExitCodes::CANCELLED {
                eprintln!("{} {:#}", "Error:".red(), e);
            }
            ExitCode::from(code)
        }
    }
}

//! Extension scripts
//!
//! Any command gengar does not know is looked up as `<scripts>/<name>.lua`
//! and handed to a script runtime together with the remaining arguments.
//! Scripts pull those arguments one at a time through `getArg()`.

mod lua;

pub use lua::{LuaRuntime, ARG_ACCESSOR};

use crate::config::{resolve_asset_dir, AssetKind};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Runs a script file with the given arguments
pub trait ScriptRuntime {
    /// Run `script`; `Err(ScriptFailed)` when the script itself reports an error
    fn invoke(&self, name: &str, script: &Path, args: &[String]) -> Result<()>;
}

/// Resolves script names against the scripts directory and runs them
#[derive(Debug, Clone)]
pub struct ScriptHost<R: ScriptRuntime> {
    dir: PathBuf,
    runtime: R,
}

impl ScriptHost<LuaRuntime> {
    /// Host over the resolved scripts directory using the embedded Lua runtime
    pub fn locate() -> Self {
        Self::new(resolve_asset_dir(AssetKind::Scripts, None), LuaRuntime::new())
    }
}

impl<R: ScriptRuntime> ScriptHost<R> {
    pub fn new(dir: impl Into<PathBuf>, runtime: R) -> Self {
        Self {
            dir: dir.into(),
            runtime,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a script name resolves to
    pub fn script_path(&self, name: &str) -> Result<PathBuf> {
        let invalid = name.is_empty()
            || name.starts_with('.')
            || name.contains('/')
            || name.contains('\\');
        if invalid {
            return Err(Error::InvalidScriptName {
                name: name.to_string(),
            });
        }
        Ok(self.dir.join(format!("{}.lua", name)))
    }

    /// Run a named script with the remaining command-line arguments
    pub fn invoke<I>(&self, name: &str, args: I) -> Result<()>
    where
        I: IntoIterator<Item = String>,
    {
        let path = self.script_path(name)?;
        if !path.is_file() {
            return Err(Error::ScriptNotFound {
                name: name.to_string(),
                path,
            });
        }

        let args: Vec<String> = args.into_iter().collect();
        tracing::debug!(script = %path.display(), args = args.len(), "running extension script");
        self.runtime.invoke(name, &path, &args)
    }
}

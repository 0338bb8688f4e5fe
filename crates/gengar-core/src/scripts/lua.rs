//! Embedded Lua runtime for extension scripts

use super::ScriptRuntime;
use crate::error::{Error, Result};
use mlua::Lua;
use std::cell::RefCell;
use std::path::Path;

/// Name of the global scripts call to pull the next argument
pub const ARG_ACCESSOR: &str = "getArg";

/// Runs scripts in a fresh embedded Lua state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LuaRuntime;

impl LuaRuntime {
    pub fn new() -> Self {
        Self
    }

    /// Register the host functions scripts can call
    ///
    /// `getArg()` yields the remaining arguments in order, then `nil` on every
    /// later call.
    fn install(lua: &Lua, args: &[String]) -> mlua::Result<()> {
        let remaining = RefCell::new(args.to_vec().into_iter());
        let get_arg = lua.create_function(move |_, ()| Ok(remaining.borrow_mut().next()))?;
        lua.globals().set(ARG_ACCESSOR, get_arg)
    }

    fn exec(&self, chunk_name: &str, source: &str, args: &[String]) -> mlua::Result<()> {
        let lua = Lua::new();
        Self::install(&lua, args)?;
        lua.load(source).set_name(chunk_name).exec()
    }
}

impl ScriptRuntime for LuaRuntime {
    fn invoke(&self, name: &str, script: &Path, args: &[String]) -> Result<()> {
        let source = std::fs::read_to_string(script).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::ScriptNotFound {
                name: name.to_string(),
                path: script.to_path_buf(),
            },
            _ => Error::fs(script, e),
        })?;

        let chunk_name = format!("@{}", script.display());
        self.exec(&chunk_name, &source, args)
            .map_err(|e| Error::ScriptFailed {
                name: name.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_get_arg_yields_args_then_nil() {
        let lua = Lua::new();
        LuaRuntime::install(&lua, &args(&["Widget", "ui"])).unwrap();

        lua.load("first = getArg(); second = getArg(); third = getArg(); fourth = getArg()")
            .exec()
            .unwrap();

        let globals = lua.globals();
        assert_eq!(globals.get::<String>("first").unwrap(), "Widget");
        assert_eq!(globals.get::<String>("second").unwrap(), "ui");
        assert_eq!(globals.get::<Option<String>>("third").unwrap(), None);
        assert_eq!(globals.get::<Option<String>>("fourth").unwrap(), None);
    }

    #[test]
    fn test_script_sees_args_through_invoke() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        let script = dir.path().join("echo.lua");
        std::fs::write(
            &script,
            r#"
local path = getArg()
local f = assert(io.open(path, "w"))
f:write(tostring(getArg()), ",", tostring(getArg()))
f:close()
"#,
        )
        .unwrap();

        LuaRuntime::new()
            .invoke(
                "echo",
                &script,
                &args(&[out.to_str().unwrap(), "Widget"]),
            )
            .unwrap();

        assert_eq!(std::fs::read_to_string(&out).unwrap(), "Widget,nil");
    }

    #[test]
    fn test_runtime_error_is_script_failure() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("broken.lua");
        std::fs::write(&script, "error('boom')").unwrap();

        let err = LuaRuntime::new().invoke("broken", &script, &[]).unwrap_err();
        match err {
            Error::ScriptFailed { name, reason } => {
                assert_eq!(name, "broken");
                assert!(reason.contains("boom"));
            }
            other => panic!("expected ScriptFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_syntax_error_is_script_failure() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("typo.lua");
        std::fs::write(&script, "local = 1").unwrap();

        let err = LuaRuntime::new().invoke("typo", &script, &[]).unwrap_err();
        assert!(matches!(err, Error::ScriptFailed { .. }));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = LuaRuntime::new()
            .invoke("gone", &dir.path().join("gone.lua"), &[])
            .unwrap_err();
        assert!(matches!(err, Error::ScriptNotFound { .. }));
    }

    #[test]
    fn test_shipped_class_script_needs_a_name() {
        let script = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../scripts/class.lua");

        let err = LuaRuntime::new().invoke("class", &script, &[]).unwrap_err();
        match err {
            Error::ScriptFailed { reason, .. } => assert!(reason.contains("usage: gengar class")),
            other => panic!("expected ScriptFailed, got {:?}", other),
        }
    }
}

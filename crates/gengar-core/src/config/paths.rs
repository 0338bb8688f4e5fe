//! Asset directory resolution for templates and extension scripts

use std::path::{Path, PathBuf};

/// Shared data directory used when nothing local is found
pub const INSTALL_DIR: &str = "/usr/local/share/gengar";

/// Kind of asset directory gengar reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Templates,
    Scripts,
}

impl AssetKind {
    /// Directory name, both locally and under the install dir
    pub fn dir_name(&self) -> &'static str {
        match self {
            AssetKind::Templates => "templates",
            AssetKind::Scripts => "scripts",
        }
    }

    /// Environment variable that overrides the lookup
    pub fn env_var(&self) -> &'static str {
        match self {
            AssetKind::Templates => "GENGAR_TEMPLATE_DIR",
            AssetKind::Scripts => "GENGAR_SCRIPTS_DIR",
        }
    }
}

/// Resolve an asset directory.
///
/// Order: explicit path, environment override, `<cwd>/<dir>` if it exists,
/// then `INSTALL_DIR/<dir>`.
pub fn resolve_asset_dir(kind: AssetKind, explicit: Option<&Path>) -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let from_env = std::env::var_os(kind.env_var()).map(PathBuf::from);
    resolve_from(kind, explicit, from_env, &cwd)
}

fn resolve_from(
    kind: AssetKind,
    explicit: Option<&Path>,
    from_env: Option<PathBuf>,
    cwd: &Path,
) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = from_env.filter(|p| !p.as_os_str().is_empty()) {
        return path;
    }

    let local = cwd.join(kind.dir_name());
    if local.is_dir() {
        return local;
    }

    tracing::debug!(
        local = %local.display(),
        "no local {} directory, using install location",
        kind.dir_name()
    );
    Path::new(INSTALL_DIR).join(kind.dir_name())
}

//! Template asset lookup and rendering
//!
//! Assets are plain text files named by convention (`CMakeLists.tmpl`,
//! `CMakeListsGTest.tmpl`, ...) and rendered with Tera.

use crate::config::{resolve_asset_dir, AssetKind};
use crate::error::{Error, Result};
use crate::templates::resolver::TemplateBinding;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};
use tokio::fs;

/// Directory of template assets
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Locate the template directory (explicit, env, local, then install dir)
    pub fn locate(explicit: Option<&Path>) -> Self {
        Self::new(resolve_asset_dir(AssetKind::Templates, explicit))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read a template asset by name
    pub async fn load(&self, name: &str) -> Result<String> {
        let path = self.dir.join(name);
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::TemplateAssetMissing {
                    name: name.to_string(),
                    path,
                })
            }
            Err(e) => Err(Error::fs(path, e)),
        }
    }

    /// Render one binding
    pub async fn render(&self, binding: &TemplateBinding) -> Result<String> {
        let source = self.load(binding.template).await?;
        render_str(binding.template, &source, binding)
    }

    /// Render bindings in order and concatenate the output, each fragment
    /// starting on its own line
    pub async fn render_all(&self, bindings: &[TemplateBinding]) -> Result<String> {
        let mut content = String::new();
        for binding in bindings {
            if !content.is_empty() && !content.ends_with('\n') {
                content.push('\n');
            }
            content.push_str(&self.render(binding).await?);
        }
        Ok(content)
    }
}

fn render_str(name: &str, source: &str, binding: &TemplateBinding) -> Result<String> {
    let invalid = |err| Error::TemplateInvalid {
        name: name.to_string(),
        source: err,
    };
    let context = Context::from_serialize(&binding.data).map_err(invalid)?;
    Tera::one_off(source, &context, false).map_err(invalid)
}

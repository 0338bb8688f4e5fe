//! Configuration: where gengar finds its templates and scripts

pub mod paths;

pub use paths::{resolve_asset_dir, AssetKind, INSTALL_DIR};

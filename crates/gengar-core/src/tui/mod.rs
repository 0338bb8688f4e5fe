//! Terminal front end: the wizard driver and cliclack prompts
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod prompts;
#[cfg(feature = "tui")]
pub mod wizard;

#[cfg(feature = "tui")]
pub use prompts::{next_steps, run, InitArgs};

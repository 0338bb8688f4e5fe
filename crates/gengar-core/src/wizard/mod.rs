//! Interactive selection wizard
//!
//! This module provides:
//! - The immutable option catalog (steps and their ordered options)
//! - The stepper state machine that records confirmed selections

pub mod catalog;
pub mod state;

pub use catalog::{Catalog, Step};
pub use state::{Direction, Selections, WizardAction, WizardState, WizardStatus};

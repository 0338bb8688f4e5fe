//! Terminal driver for the selection wizard

use crate::wizard::{Catalog, Direction, WizardAction, WizardState};
use colored::Colorize;
use console::{Key, Term};
use std::io;

const INSTRUCTIONS: &str =
    "Use arrow keys to select, enter to confirm, 'n' for next, 'p' for previous, 'q' to quit.";

/// Decode a key press into a wizard action
pub fn action_for_key(key: &Key) -> Option<WizardAction> {
    match key {
        Key::ArrowUp | Key::Char('k') => Some(WizardAction::Move(Direction::Up)),
        Key::ArrowDown | Key::Char('j') => Some(WizardAction::Move(Direction::Down)),
        Key::Enter => Some(WizardAction::Confirm),
        Key::Char('n') => Some(WizardAction::Advance),
        Key::Char('p') => Some(WizardAction::Retreat),
        Key::Char('q') | Key::Escape | Key::Char('\u{3}') => Some(WizardAction::Cancel),
        _ => None,
    }
}

/// Lines drawn for the current step; empty once the run is over
pub fn render(state: &WizardState<'_>) -> Vec<String> {
    let Some(step) = state.current_step() else {
        return Vec::new();
    };
    let recorded = state.selections().get(step.label());

    let mut lines = vec![
        format!(
            "Step {}/{}: {}",
            state.step_index() + 1,
            state.catalog().len(),
            step.label()
        )
        .magenta()
        .bold()
        .to_string(),
        String::new(),
    ];

    for (i, option) in step.options().iter().enumerate() {
        let marker = if recorded == Some(option) { " ✓" } else { "" };
        let line = if i == state.cursor() {
            format!("> {}{}", option, marker).cyan().bold().to_string()
        } else {
            format!("  {}{}", option, marker)
        };
        lines.push(line);
    }

    lines.push(String::new());
    lines.push(INSTRUCTIONS.dimmed().to_string());
    lines
}

/// Run the wizard on `term` until the user confirms the last step or quits
pub fn run_wizard<'a>(catalog: &'a Catalog, term: &Term) -> io::Result<WizardState<'a>> {
    let mut state = WizardState::new(catalog);
    if catalog.is_empty() {
        return Ok(state);
    }

    term.hide_cursor()?;
    let result = drive(&mut state, term);
    term.show_cursor()?;
    result.map(|_| state)
}

fn drive(state: &mut WizardState<'_>, term: &Term) -> io::Result<()> {
    while !state.is_finished() {
        let lines = render(state);
        for line in &lines {
            term.write_line(line)?;
        }

        let key = match term.read_key() {
            Ok(key) => Some(key),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                state.cancel();
                None
            }
            Err(e) => return Err(e),
        };
        term.clear_last_lines(lines.len())?;

        if let Some(action) = key.as_ref().and_then(action_for_key) {
            state.apply(action);
        }
    }
    Ok(())
}

//! Interactive prompts
//!
//! Terminal prompts block until the operator answers. When input is piped,
//! answers are read line by line instead.

use std::io::BufRead;

use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::error::Result;

/// Ask for confirmation before a destructive operation
///
/// Returns `true` immediately when `skip` is set (`-y` or batch mode).
pub fn confirm_action(prompt: &str, skip: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }
    if !is_interactive() {
        eprint!("{} [y/N]: ", prompt);
        let answer = read_line_answer(&mut std::io::stdin().lock())?;
        return Ok(is_yes(&answer));
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    Ok(confirmed)
}

/// Ask for a free-text answer; an empty answer is allowed
pub fn prompt_text(prompt: &str) -> Result<String> {
    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(answer.trim().to_string())
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "yes")
}

/// Whether prompts can be rendered on the terminal
pub fn is_interactive() -> bool {
    console::Term::stderr().is_term()
}

/// Read one answer line from non-terminal input; end of input is an empty answer
pub fn read_line_answer<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

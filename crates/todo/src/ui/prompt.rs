//! dialoguer-backed prompts.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::domain::{is_affirmative, Confirm};
use crate::errors::TodoResult;

/// Read one line of free text; blank input is allowed
pub fn prompt_text(prompt: &str) -> TodoResult<String> {
    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(answer)
}

/// Yes/no confirmation on the terminal.
///
/// Only `y`/`yes` confirms; any other answer declines.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> TodoResult<bool> {
        let answer = prompt_text(&format!("{prompt} (y/n)"))?;
        Ok(is_affirmative(&answer))
    }
}

//! Confirmation seam for destructive operations.

use crate::errors::TodoResult;

/// Asks the user a yes/no question before a destructive change.
///
/// The terminal implementation lives in `ui`; closures implement it too,
/// which is what tests use.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> TodoResult<bool>;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> TodoResult<bool> {
        Ok(self(prompt))
    }
}

/// `y` or `yes` in any case; everything else declines
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

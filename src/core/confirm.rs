//! # Confirmation
//!
//! Destructive operations ask before acting. The question is put to whatever
//! `Confirm` the caller passes in: the TUI answers with a modal dialog, tests
//! answer with a closure.
//!
//! ```rust,ignore
//! list.clear(&mut |_prompt: &str| true);   // always yes
//! list.clear(&mut |_prompt: &str| false);  // always no
//! ```

/// A blocking yes/no decision.
pub trait Confirm {
    /// Ask `prompt` and return `true` if the user agreed.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}
